//! Start time suggestion for chaining a new task after a day's last one.

use crate::models::Task;

use super::time::{format_minutes, to_minutes};

/// Gap left between the end of the last task and a chained task.
pub const CHAIN_GAP_MINUTES: i32 = 5;

/// Suggested start for a task chained after the latest-starting task of a
/// day: that task's end plus [`CHAIN_GAP_MINUTES`], wrapping past midnight.
///
/// Returns an empty string for an empty day or when the last task's end
/// time cannot be parsed.
///
/// # Examples
///
/// ```rust
/// use cadence_core::engine::chain::chained_start_time;
/// use cadence_core::models::Task;
///
/// let lecture = Task {
///     id: "1".to_string(),
///     title: "Lecture".to_string(),
///     start_time: "09:00".to_string(),
///     end_time: "10:30".to_string(),
///     details: String::new(),
///     is_urgent: false,
///     is_recurring: true,
///     week_offset: None,
///     category: None,
/// };
///
/// assert_eq!(chained_start_time([&lecture]), "10:35");
/// ```
pub fn chained_start_time<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut tasks: Vec<&Task> = tasks.into_iter().collect();
    tasks.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    tasks
        .last()
        .and_then(|last| to_minutes(&last.end_time))
        .map(|end| format_minutes(end + CHAIN_GAP_MINUTES))
        .unwrap_or_default()
}
