//! SQLite-backed key-value storage.
//!
//! The planner keeps one JSON blob per fixed key (see [`keys`]). This module
//! owns the connection and the schema; [`kv_queries`] reads and writes raw
//! blobs and [`records`] layers typed accessors on top.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;
pub mod records;

/// Fixed storage keys.
pub mod keys {
    pub const SCHEDULE: &str = "weeklySchedule";
    pub const TASK_STATUSES: &str = "taskStatuses";
    pub const STUDY_PLAN: &str = "studyPlan";
    pub const API_KEY: &str = "apiKey";
    pub const WEEK_KEY: &str = "weekKey";
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
