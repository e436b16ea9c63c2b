//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS kv_store (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

impl super::Database {
    /// Creates the key-value table when missing.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")?;
        Ok(())
    }
}
