//! Status enumerations and per-occurrence status records.

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

/// Status as persisted for a task occurrence.
///
/// Only user-confirmed states are ever stored. In-progress is derived at read
/// time, see [`DisplayStatus`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoredStatus {
    /// Not yet acted upon
    #[default]
    #[serde(alias = "in-progress")]
    Pending,

    /// Marked done by the user
    Completed,

    /// Marked failed by the user, possibly with a note
    Failed,
}

impl StoredStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredStatus::Pending => "pending",
            StoredStatus::Completed => "completed",
            StoredStatus::Failed => "failed",
        }
    }
}

/// Effective status of a task occurrence as shown to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStatus {
    Pending,
    /// Stored status is pending, the occurrence is today and its start time
    /// has passed
    InProgress,
    Completed,
    Failed,
}

impl FromStr for DisplayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DisplayStatus::Pending),
            "in-progress" | "inprogress" | "in_progress" => Ok(DisplayStatus::InProgress),
            "completed" | "done" => Ok(DisplayStatus::Completed),
            "failed" => Ok(DisplayStatus::Failed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Pending => "pending",
            DisplayStatus::InProgress => "in-progress",
            DisplayStatus::Completed => "completed",
            DisplayStatus::Failed => "failed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::models::DisplayStatus;
    ///
    /// assert_eq!(DisplayStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(DisplayStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(DisplayStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(DisplayStatus::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            DisplayStatus::Pending => "○ Pending",
            DisplayStatus::InProgress => "➤ In Progress",
            DisplayStatus::Completed => "✓ Completed",
            DisplayStatus::Failed => "✗ Failed",
        }
    }
}

impl From<StoredStatus> for DisplayStatus {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Pending => DisplayStatus::Pending,
            StoredStatus::Completed => DisplayStatus::Completed,
            StoredStatus::Failed => DisplayStatus::Failed,
        }
    }
}

/// Stored status of one task occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    pub task_id: String,

    /// ISO date of the occurrence (`YYYY-MM-DD`)
    pub date: String,

    pub status: StoredStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_note: Option<String>,
}

impl TaskStatus {
    /// Implicit record for an occurrence nobody has acted on yet.
    pub fn pending(task_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            date: date.into(),
            status: StoredStatus::Pending,
            failure_note: None,
        }
    }
}

/// All stored status records, keyed by `"{dateKey}-{taskId}"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StatusBook(BTreeMap<String, TaskStatus>);

impl StatusBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage key of one occurrence.
    pub fn key(date_key: &str, task_id: &str) -> String {
        format!("{date_key}-{task_id}")
    }

    pub fn get(&self, date_key: &str, task_id: &str) -> Option<&TaskStatus> {
        self.0.get(&Self::key(date_key, task_id))
    }

    /// Stores a record, replacing whatever was there for the same occurrence.
    pub fn insert(&mut self, record: TaskStatus) {
        self.0.insert(Self::key(&record.date, &record.task_id), record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskStatus> {
        self.0.values()
    }
}
