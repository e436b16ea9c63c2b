//! Task model definition.

use serde::{Deserialize, Serialize};

use super::Category;

/// A manually scheduled task, attached to one weekday of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier
    pub id: String,

    /// Short title
    pub title: String,

    /// Start of the task, "HH:MM" in 24-hour time
    pub start_time: String,

    /// End of the task; equal to `start_time` for point events
    pub end_time: String,

    /// Free text notes, may be empty
    #[serde(default)]
    pub details: String,

    #[serde(default)]
    pub is_urgent: bool,

    /// Recurring tasks repeat every week and never carry a week offset
    #[serde(default)]
    pub is_recurring: bool,

    /// Week this one-off task belongs to, relative to the week it was
    /// created in. Absent on recurring and legacy tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_offset: Option<i32>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::category::deserialize_optional"
    )]
    pub category: Option<Category>,
}

impl Task {
    /// Whether the task is a zero-length point event.
    pub fn is_point_event(&self) -> bool {
        self.start_time == self.end_time
    }
}
