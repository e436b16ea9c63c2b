//! Raw blob reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl super::Database {
    /// Returns the blob stored under `key`, if any.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    /// Stores `value` under `key`, replacing any previous blob.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                UPSERT_VALUE_SQL,
                params![key, value, Timestamp::now().to_string()],
            )
            .db_context("Failed to write stored value")?;
        Ok(())
    }

    /// Deletes the blob under `key`. Returns whether anything was removed.
    pub fn remove_value(&self, key: &str) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete stored value")?;
        Ok(rows > 0)
    }
}
