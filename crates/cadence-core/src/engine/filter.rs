//! Which stored tasks belong to a given week.

use crate::models::Task;

/// Whether a task shows up in the week `week_offset` away from the current
/// one.
///
/// Recurring tasks appear every week. A one-off task appears only in the week
/// it was created for. Legacy one-off tasks without a stored offset show up
/// in every week.
pub fn is_visible(task: &Task, week_offset: i32) -> bool {
    task.is_recurring || task.week_offset.map_or(true, |w| w == week_offset)
}

/// Visible tasks of one weekday, keeping stored order.
pub fn visible_tasks(tasks: &[Task], week_offset: i32) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| is_visible(task, week_offset))
        .collect()
}
