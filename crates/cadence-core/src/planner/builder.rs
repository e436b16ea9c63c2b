//! Construction of [`Planner`] values.

use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use tokio::task;

use super::{Clock, Planner};
use crate::{
    db::Database,
    error::{CadenceError, Result},
};

const APP_DIR: &str = "cadence";
const DB_FILE: &str = "cadence.db";

/// Configures where the schedule is stored and which clock the planner reads.
///
/// ```no_run
/// # async fn demo() -> cadence_core::Result<()> {
/// let planner = cadence_core::PlannerBuilder::new()
///     .with_database_path(Some("/tmp/cadence.db"))
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    clock: Clock,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores data in `path` instead of `$XDG_DATA_HOME/cadence/cadence.db`.
    /// `None` keeps the current choice.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Freezes "now" at `now` (local wall time). `None` keeps the system
    /// clock.
    pub fn with_fixed_time(mut self, now: Option<DateTime>) -> Self {
        if let Some(now) = now {
            self.clock = Clock::Fixed(now);
        }
        self
    }

    /// Resolves the database location, creates its directory and the
    /// `kv_store` table, then hands back a planner bound to that file.
    ///
    /// # Errors
    ///
    /// `XdgDirectory` when no data directory can be found, `FileSystem` when
    /// the parent directory cannot be created, `Database` when SQLite cannot
    /// open or migrate the file.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => xdg_database_path()?,
        };
        ensure_parent_dir(&db_path)?;

        let open_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&open_path).map(drop))
            .await
            .map_err(CadenceError::join)??;

        log::debug!(
            "Planner ready (database: {}, clock: {:?})",
            db_path.display(),
            self.clock
        );
        Ok(Planner::new(db_path, self.clock))
    }
}

fn xdg_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_DIR)
        .place_data_file(DB_FILE)
        .map_err(|e| CadenceError::XdgDirectory(e.to_string()))
}

fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| CadenceError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
