//! Errors raised by the cadence core.
//!
//! Input problems (bad times, missing titles, a status change the occurrence
//! does not allow) are kept apart from storage and generation failures so the
//! CLI and the MCP server can tell a user mistake from a broken environment.

use std::path::PathBuf;

use thiserror::Error;

use crate::generator::GenerationError;

#[derive(Error, Debug)]
pub enum CadenceError {
    /// SQLite failed while reading or writing the key-value store
    #[error("Storage error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Task with ID {id} not found on {weekday}")]
    TaskNotFound { id: String, weekday: String },

    /// A status change the occurrence's current state does not allow
    #[error("Cannot {action} a task that is {from}")]
    InvalidTransition { from: String, action: String },

    #[error("No study plan found. Generate one with `cadence plan generate`.")]
    NoStudyPlan,

    /// `number` is 1-based, as shown to the user
    #[error("Session {number} not found on {day}")]
    SessionNotFound { day: String, number: usize },

    /// A draft, time string, key or session edit was rejected
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Could not prepare database directory '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not locate the data directory: {0}")]
    XdgDirectory(String),

    #[error("Malformed JSON: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Pending [`CadenceError::Database`] that still needs its SQLite cause.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    pub fn with_source(self, source: rusqlite::Error) -> CadenceError {
        CadenceError::Database {
            message: self.message,
            source,
        }
    }
}

/// Pending [`CadenceError::InvalidInput`] for one named field.
pub struct FieldErrorBuilder {
    field: String,
}

impl FieldErrorBuilder {
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Starts a storage error, e.g.
    /// `CadenceError::database("Failed to read key").with_source(err)`.
    pub fn database(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder {
            message: message.into(),
        }
    }

    /// Starts an input error for `field`, finished with
    /// [`FieldErrorBuilder::with_reason`].
    pub fn invalid_input(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder {
            field: field.into(),
        }
    }

    /// True for mistakes the caller can fix by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CadenceError::InvalidInput { .. }
                | CadenceError::TaskNotFound { .. }
                | CadenceError::InvalidTransition { .. }
                | CadenceError::SessionNotFound { .. }
                | CadenceError::NoStudyPlan
        )
    }

    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Background storage task failed: {error}"),
        }
    }
}

/// Attaches a storage message to raw `rusqlite` results.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::database(message).with_source(e))
    }
}

pub type Result<T> = std::result::Result<T, CadenceError>;
