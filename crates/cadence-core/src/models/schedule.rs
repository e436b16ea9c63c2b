//! Weekly schedule and its pure mutators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Task, Weekday};

/// Tasks per weekday, each list kept ordered by start time.
///
/// Mutations never touch the receiver: [`Schedule::with_task_added`] and
/// [`Schedule::with_task_removed`] return a new schedule where only the
/// affected weekday's list differs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schedule(BTreeMap<Weekday, Vec<Task>>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks stored for a weekday, regardless of week.
    pub fn tasks_for(&self, weekday: Weekday) -> &[Task] {
        self.0.get(&weekday).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find(&self, weekday: Weekday, task_id: &str) -> Option<&Task> {
        self.tasks_for(weekday).iter().find(|t| t.id == task_id)
    }

    /// Whether any weekday already holds a task with this ID.
    pub fn contains_id(&self, task_id: &str) -> bool {
        self.0.values().flatten().any(|t| t.id == task_id)
    }

    /// Total number of stored tasks over all weekdays.
    pub fn task_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Appends a task to a weekday and re-sorts that day by start time.
    ///
    /// Sorting compares the raw "HH:MM" strings, which orders zero-padded
    /// times chronologically. The sort is stable so equal start times keep
    /// insertion order.
    pub fn with_task_added(&self, weekday: Weekday, task: Task) -> Schedule {
        let mut tasks = self.tasks_for(weekday).to_vec();
        tasks.push(task);
        tasks.sort_by(|a, b| a.start_time.cmp(&b.start_time));

        let mut days = self.0.clone();
        days.insert(weekday, tasks);
        Schedule(days)
    }

    /// Removes the task with the given ID from a weekday. Unknown IDs leave
    /// the schedule unchanged.
    pub fn with_task_removed(&self, weekday: Weekday, task_id: &str) -> Schedule {
        let mut days = self.0.clone();
        if let Some(tasks) = days.get_mut(&weekday) {
            tasks.retain(|t| t.id != task_id);
        }
        Schedule(days)
    }
}
