//! High-level planner API over the weekly schedule and the study plan.
//!
//! [`Planner`] is the only component that touches storage. Every operation
//! loads the records it needs on a blocking thread, hands them to the pure
//! [`engine`](crate::engine) functions together with the clock's "now", and
//! writes back whatever changed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │     Engine      │    │    Database     │
//! │ (schedule_ops,  │───▶│ (calendar,      │    │   (via db/)     │
//! │  status_ops,    │    │  filter, time,  │    │                 │
//! │  study_ops)     │───────────────────────────▶│                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Planner`] instances
//! - [`clock`]: System or pinned wall clock
//! - [`views`]: Day and week projections
//! - [`schedule_ops`]: Adding and deleting tasks
//! - [`status_ops`]: Per-occurrence status changes
//! - [`study_ops`]: Study plan, API key and week rollover
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{models::Weekday, params::{AddTask, ViewDay}, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("cadence.db")))
//!     .with_fixed_time(Some(date(2024, 3, 11).at(9, 30, 0, 0)))
//!     .build()
//!     .await?;
//!
//! planner
//!     .add_task(&AddTask::new(Weekday::Monday, "Anatomy").at("09:00", "11:00"))
//!     .await?;
//!
//! let day = planner
//!     .day(&ViewDay { weekday: Some(Weekday::Monday), week_offset: 0 })
//!     .await?;
//! assert_eq!(day.stats.total, 1);
//! assert!(day.happening_now.is_some());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::civil::{Date, DateTime};
use tokio::task;

use crate::{
    db::Database,
    error::{CadenceError, Result},
};

pub mod builder;
pub mod clock;
pub mod schedule_ops;
pub mod status_ops;
pub mod study_ops;
pub mod views;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use clock::Clock;

/// Main planner interface.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Clock,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, clock: Clock) -> Self {
        Self { db_path, clock }
    }

    /// Current local date and time as seen by this planner.
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    pub fn today(&self) -> Date {
        self.now().date()
    }

    /// Runs `work` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            work(&db)
        })
        .await
        .map_err(CadenceError::join)?
    }
}
