//! Derived, read-only views over the schedule.
//!
//! These are recomputed from stored data and the current time on every read
//! and are never persisted.

use jiff::civil::Date;
use serde::Serialize;

use super::{DisplayStatus, Task, Weekday};

/// One visible task with everything derived for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskView {
    pub task: Task,
    pub status: DisplayStatus,
    pub failure_note: Option<String>,
    /// Today and `now` within `[start, end)`
    pub is_active: bool,
    /// Today and starting within the next hour
    pub is_upcoming: bool,
    /// Today and already ended
    pub is_past: bool,
    /// Countdown such as "in 1h 5m", only for upcoming pending tasks
    pub countdown: Option<String>,
}

/// Aggregate counts for a day.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DayStats {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    /// Everything neither completed nor failed, in-progress included
    pub pending: usize,
}

/// A single weekday of a specific week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayView {
    pub weekday: Weekday,
    pub date: Date,
    pub week_offset: i32,
    pub week_label: String,
    pub is_today: bool,
    pub tasks: Vec<TaskView>,
    pub stats: DayStats,
    /// First pending task running right now, only when viewing today
    pub happening_now: Option<Task>,
}

/// Per-day line of a week overview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekDaySummary {
    pub weekday: Weekday,
    pub date: Date,
    pub is_today: bool,
    pub stats: DayStats,
}

/// Seven days of a week with their counts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekView {
    pub week_offset: i32,
    pub label: String,
    pub days: Vec<WeekDaySummary>,
}
