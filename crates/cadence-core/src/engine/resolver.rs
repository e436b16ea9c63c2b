//! Status derivation and the per-occurrence status state machine.
//!
//! Stored records only ever hold pending, completed or failed. In-progress is
//! projected at read time by [`derive_display_status`] and never written back.

use crate::{
    error::{CadenceError, Result},
    models::{DayStats, DisplayStatus, StoredStatus, Task, TaskStatus, TaskView},
};

use super::time;

/// Effective status of one occurrence.
///
/// A missing record counts as pending. Pending is promoted to in-progress
/// only when the occurrence is today and its start time has been reached.
pub fn derive_display_status(
    stored: Option<&TaskStatus>,
    task: &Task,
    now: i32,
    is_today: bool,
) -> DisplayStatus {
    let status = stored.map(|record| record.status).unwrap_or_default();
    match status {
        StoredStatus::Pending if is_today && time::has_started(&task.start_time, now) => {
            DisplayStatus::InProgress
        }
        other => other.into(),
    }
}

/// User action on an occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    /// Mark completed
    Done,
    /// Mark failed, optionally with a note
    Fail { note: Option<String> },
    /// Return a completed or failed occurrence to pending
    Undo,
    /// Replace the note of a failed occurrence
    SaveNote { note: String },
}

impl StatusAction {
    fn verb(&self) -> &'static str {
        match self {
            StatusAction::Done => "complete",
            StatusAction::Fail { .. } => "fail",
            StatusAction::Undo => "undo",
            StatusAction::SaveNote { .. } => "edit the note of",
        }
    }
}

/// Computes the record to store after `action`.
///
/// Done and Fail apply to pending occurrences (in-progress is pending in
/// storage). Undo applies to completed or failed ones and keeps the note.
/// SaveNote applies only to failed ones.
pub fn apply_action(
    task_id: &str,
    date_key: &str,
    current: Option<&TaskStatus>,
    action: StatusAction,
) -> Result<TaskStatus> {
    let current = current
        .cloned()
        .unwrap_or_else(|| TaskStatus::pending(task_id, date_key));

    let reject = |action: &StatusAction| CadenceError::InvalidTransition {
        from: current.status.as_str().to_string(),
        action: action.verb().to_string(),
    };

    let (status, failure_note) = match (current.status, action) {
        (StoredStatus::Pending, StatusAction::Done) => (StoredStatus::Completed, None),
        (StoredStatus::Pending, StatusAction::Fail { note }) => {
            (StoredStatus::Failed, Some(note.unwrap_or_default()))
        }
        (StoredStatus::Completed | StoredStatus::Failed, StatusAction::Undo) => {
            (StoredStatus::Pending, current.failure_note.clone())
        }
        (StoredStatus::Failed, StatusAction::SaveNote { note }) => {
            (StoredStatus::Failed, Some(note))
        }
        (_, action) => return Err(reject(&action)),
    };

    Ok(TaskStatus {
        task_id: task_id.to_string(),
        date: date_key.to_string(),
        status,
        failure_note,
    })
}

/// Annotates a visible task for display.
///
/// Time flags are only meaningful for today's occurrences and stay `false`
/// on any other date.
pub fn annotate(task: &Task, stored: Option<&TaskStatus>, now: i32, is_today: bool) -> TaskView {
    let status = derive_display_status(stored, task, now, is_today);
    let is_active = is_today && time::is_active(&task.start_time, &task.end_time, now);
    let is_upcoming = is_today && time::is_upcoming(&task.start_time, now);
    let is_past = is_today && time::is_past(&task.end_time, now);

    let countdown = (is_upcoming && !is_active && status == DisplayStatus::Pending)
        .then(|| time::remaining_label(&task.start_time, now))
        .filter(|label| !label.is_empty());

    TaskView {
        task: task.clone(),
        status,
        failure_note: stored.and_then(|record| record.failure_note.clone()),
        is_active,
        is_upcoming,
        is_past,
        countdown,
    }
}

/// Tallies a day's annotated tasks. In-progress counts as pending.
pub fn tally(views: &[TaskView]) -> DayStats {
    let completed = views
        .iter()
        .filter(|v| v.status == DisplayStatus::Completed)
        .count();
    let failed = views
        .iter()
        .filter(|v| v.status == DisplayStatus::Failed)
        .count();
    DayStats {
        total: views.len(),
        completed,
        failed,
        pending: views.len() - completed - failed,
    }
}

/// The task running right now: the first active view whose occurrence is
/// still pending in storage.
pub fn happening_now(views: &[TaskView]) -> Option<&Task> {
    views
        .iter()
        .find(|v| v.is_active && v.status == DisplayStatus::InProgress)
        .map(|v| &v.task)
}
