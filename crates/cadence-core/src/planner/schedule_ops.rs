//! Adding and deleting tasks in the weekly schedule.

use jiff::Timestamp;

use super::Planner;
use crate::{
    engine::{
        chain::chained_start_time,
        filter::visible_tasks,
        time::{format_minutes, to_minutes},
    },
    error::{CadenceError, Result},
    models::{Schedule, Task},
    params::{AddTask, TaskRef},
};

/// Rewrites a time as zero-padded "HH:MM" so string order stays
/// chronological.
fn normalize_time(field: &str, value: &str) -> Result<String> {
    to_minutes(value).map(format_minutes).ok_or_else(|| {
        CadenceError::invalid_input(field)
            .with_reason(format!("'{value}' is not a valid HH:MM time"))
    })
}

/// Millisecond timestamp ID, bumped until unused.
fn next_task_id(schedule: &Schedule) -> String {
    let mut candidate = Timestamp::now().as_millisecond();
    while schedule.contains_id(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Turns a validated draft into a stored task.
///
/// A chained draft takes its start from the day's visible tasks in the
/// draft's week; an empty day leaves the start blank and the draft is
/// rejected.
pub(crate) fn build_task(schedule: &Schedule, mut draft: AddTask) -> Result<Task> {
    if draft.chain_to_previous && !draft.same_as_start {
        let visible = visible_tasks(schedule.tasks_for(draft.weekday), draft.week_offset);
        draft.start_time = chained_start_time(visible);
    }
    draft.validate()?;

    let start_time = normalize_time("start_time", &draft.start_time)?;
    let end_time = if draft.same_as_start || draft.end_time.trim().is_empty() {
        start_time.clone()
    } else {
        normalize_time("end_time", &draft.end_time)?
    };

    Ok(Task {
        id: next_task_id(schedule),
        title: draft.title.trim().to_string(),
        start_time,
        end_time,
        details: draft.details.trim().to_string(),
        is_urgent: draft.is_urgent,
        is_recurring: draft.is_recurring,
        week_offset: (!draft.is_recurring).then_some(draft.week_offset),
        category: draft.category,
    })
}

impl Planner {
    /// Adds a task to a weekday and returns it with its assigned ID.
    pub async fn add_task(&self, params: &AddTask) -> Result<Task> {
        let draft = params.clone();
        self.with_db(move |db| {
            let schedule = db.load_schedule()?;
            let weekday = draft.weekday;
            let task = build_task(&schedule, draft)?;
            db.save_schedule(&schedule.with_task_added(weekday, task.clone()))?;
            log::debug!("Added task {} on {weekday}", task.id);
            Ok(task)
        })
        .await
    }

    /// Deletes a task from a weekday, returning it if it existed.
    ///
    /// Status records of the task's past occurrences are left in place.
    pub async fn delete_task(&self, params: &TaskRef) -> Result<Option<Task>> {
        let TaskRef { weekday, task_id } = params.clone();
        self.with_db(move |db| {
            let schedule = db.load_schedule()?;
            let Some(task) = schedule.find(weekday, &task_id).cloned() else {
                return Ok(None);
            };
            db.save_schedule(&schedule.with_task_removed(weekday, &task_id))?;
            log::debug!("Deleted task {task_id} from {weekday}");
            Ok(Some(task))
        })
        .await
    }
}
