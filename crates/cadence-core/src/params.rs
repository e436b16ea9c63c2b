//! Parameter structures for planner operations.
//!
//! These are shared by every interface (CLI, MCP) so that validation lives in
//! one place. Interface layers wrap them with their own derives and convert
//! via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (this module)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Week offsets are relative to the current real-world week: `0` is this
//! week, `-1` last week, `1` next week.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    engine::StatusAction,
    error::{CadenceError, Result},
    models::{Category, SessionKind, SessionPatch, Weekday},
};

/// Parameters for the week overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ViewWeek {
    /// Week offset from the current week (0 = this week)
    #[serde(default)]
    pub week_offset: i32,
}

/// Parameters for a single day view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ViewDay {
    /// Weekday to show; defaults to today's weekday
    #[serde(default)]
    pub weekday: Option<Weekday>,
    /// Week offset from the current week (0 = this week)
    #[serde(default)]
    pub week_offset: i32,
}

/// Parameters for adding a task to the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddTask {
    /// Weekday the task belongs to
    pub weekday: Weekday,
    /// Title of the task (required)
    pub title: String,
    /// Start time, "HH:MM" 24-hour. Ignored when chaining.
    #[serde(default)]
    pub start_time: String,
    /// End time, "HH:MM" 24-hour. Optional for point events and chained tasks.
    #[serde(default)]
    pub end_time: String,
    /// Free text notes
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_urgent: bool,
    /// Repeat every week instead of only in the week given by `week_offset`
    #[serde(default)]
    pub is_recurring: bool,
    /// Make this a point event ending when it starts
    #[serde(default)]
    pub same_as_start: bool,
    /// Start 5 minutes after the last task of the day
    #[serde(default)]
    pub chain_to_previous: bool,
    /// Week the one-off task is for (0 = this week)
    #[serde(default)]
    pub week_offset: i32,
}

impl AddTask {
    /// Minimal draft for a weekday, used by builders and tests.
    pub fn new(weekday: Weekday, title: impl Into<String>) -> Self {
        Self {
            weekday,
            title: title.into(),
            start_time: String::new(),
            end_time: String::new(),
            details: String::new(),
            category: None,
            is_urgent: false,
            is_recurring: false,
            same_as_start: false,
            chain_to_previous: false,
            week_offset: 0,
        }
    }

    pub fn at(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }

    /// Checks the fields required before a task can be added.
    ///
    /// Runs after any chained start time has been filled in: the title and
    /// start must be non-blank, and an end time is needed unless the task is
    /// a point event or chained.
    pub fn validate(&self) -> Result<()> {
        if self.same_as_start && self.chain_to_previous {
            return Err(CadenceError::invalid_input("same_as_start")
                .with_reason("Cannot combine same-as-start with chaining"));
        }
        if self.title.trim().is_empty() {
            return Err(CadenceError::invalid_input("title").with_reason("Title is required"));
        }
        if self.start_time.trim().is_empty() {
            let reason = if self.chain_to_previous {
                "No earlier task to chain after; give a start time instead"
            } else {
                "Start time is required"
            };
            return Err(CadenceError::invalid_input("start_time").with_reason(reason));
        }
        if self.end_time.trim().is_empty() && !self.same_as_start && !self.chain_to_previous {
            return Err(CadenceError::invalid_input("end_time")
                .with_reason("End time is required unless the task is a point event"));
        }
        Ok(())
    }
}

/// Identifies a task in the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskRef {
    pub weekday: Weekday,
    pub task_id: String,
}

/// Identifies one occurrence of a task: its weekday in a given week.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Occurrence {
    pub weekday: Weekday,
    pub task_id: String,
    /// Week offset from the current week (0 = this week)
    #[serde(default)]
    pub week_offset: i32,
}

/// Status change requested by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusChange {
    /// Mark the occurrence completed
    Done,
    /// Mark the occurrence failed, optionally with a note
    Fail,
    /// Return a completed or failed occurrence to pending
    Undo,
    /// Replace the note of a failed occurrence
    Note,
}

impl std::str::FromStr for StatusChange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "done" | "complete" | "completed" => Ok(StatusChange::Done),
            "fail" | "failed" => Ok(StatusChange::Fail),
            "undo" => Ok(StatusChange::Undo),
            "note" => Ok(StatusChange::Note),
            _ => Err(format!(
                "Invalid status change: {s}. Must be 'done', 'fail', 'undo' or 'note'"
            )),
        }
    }
}

/// Parameters for changing the status of one occurrence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskStatus {
    #[serde(flatten)]
    pub occurrence: Occurrence,
    pub change: StatusChange,
    /// Failure note for 'fail' (optional) and 'note' (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl UpdateTaskStatus {
    /// Converts the request into a resolver action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{
    ///     engine::StatusAction,
    ///     models::Weekday,
    ///     params::{Occurrence, StatusChange, UpdateTaskStatus},
    /// };
    ///
    /// let params = UpdateTaskStatus {
    ///     occurrence: Occurrence {
    ///         weekday: Weekday::Monday,
    ///         task_id: "1".to_string(),
    ///         week_offset: 0,
    ///     },
    ///     change: StatusChange::Note,
    ///     note: None,
    /// };
    /// assert!(params.action().is_err());
    /// ```
    pub fn action(&self) -> Result<StatusAction> {
        Ok(match self.change {
            StatusChange::Done => StatusAction::Done,
            StatusChange::Fail => StatusAction::Fail {
                note: self.note.clone(),
            },
            StatusChange::Undo => StatusAction::Undo,
            StatusChange::Note => StatusAction::SaveNote {
                note: self.note.clone().ok_or_else(|| {
                    CadenceError::invalid_input("note")
                        .with_reason("A note is required when editing a failure note")
                })?,
            },
        })
    }
}

/// Identifies a study plan session by weekday and 1-based position.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionRef {
    pub day: Weekday,
    /// Position within the day, starting at 1
    pub number: usize,
}

/// Parameters for editing a study plan session. Unset fields are kept.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateSession {
    #[serde(flatten)]
    pub session: SessionRef,
    pub time: Option<String>,
    pub kind: Option<SessionKind>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub focus: Option<String>,
}

impl UpdateSession {
    /// Splits into the session reference and the patch to apply.
    pub fn into_parts(self) -> Result<(SessionRef, SessionPatch)> {
        let patch = SessionPatch {
            time: self.time,
            kind: self.kind,
            title: self.title,
            icon: self.icon,
            focus: self.focus,
        };
        if patch.is_empty() {
            return Err(CadenceError::invalid_input("session")
                .with_reason("Nothing to update; give at least one field"));
        }
        Ok((self.session, patch))
    }
}
