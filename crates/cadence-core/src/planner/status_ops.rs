//! Per-occurrence status changes.

use super::Planner;
use crate::{
    engine::{
        calendar::{date_key, week_dates},
        filter::is_visible,
        resolver::{annotate, apply_action},
        time::minute_of_day,
    },
    error::{CadenceError, Result},
    models::TaskView,
    params::{Occurrence, StatusChange, UpdateTaskStatus},
};

impl Planner {
    /// Applies a status change to one occurrence and returns it re-derived.
    ///
    /// The task must exist on the weekday and be visible in the requested
    /// week. Changes the current state does not allow are rejected with
    /// [`CadenceError::InvalidTransition`].
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<TaskView> {
        let action = params.action()?;
        let Occurrence {
            weekday,
            task_id,
            week_offset,
        } = params.occurrence.clone();
        let now = self.now();

        self.with_db(move |db| {
            let schedule = db.load_schedule()?;
            let task = schedule
                .find(weekday, &task_id)
                .filter(|task| is_visible(task, week_offset))
                .cloned()
                .ok_or_else(|| CadenceError::TaskNotFound {
                    id: task_id.clone(),
                    weekday: weekday.to_string(),
                })?;

            let date = week_dates(now.date(), week_offset)[weekday.index()];
            let key = date_key(date);

            let mut statuses = db.load_statuses()?;
            let record = apply_action(&task.id, &key, statuses.get(&key, &task.id), action)?;
            statuses.insert(record.clone());
            db.save_statuses(&statuses)?;
            log::debug!("Task {} on {key} is now {}", task.id, record.status.as_str());

            Ok(annotate(
                &task,
                Some(&record),
                minute_of_day(now.time()),
                date == now.date(),
            ))
        })
        .await
    }

    async fn change_status(
        &self,
        occurrence: &Occurrence,
        change: StatusChange,
        note: Option<String>,
    ) -> Result<TaskView> {
        self.update_task_status(&UpdateTaskStatus {
            occurrence: occurrence.clone(),
            change,
            note,
        })
        .await
    }

    /// Marks an occurrence completed.
    pub async fn mark_done(&self, occurrence: &Occurrence) -> Result<TaskView> {
        self.change_status(occurrence, StatusChange::Done, None).await
    }

    /// Marks an occurrence failed with an optional note.
    pub async fn mark_failed(
        &self,
        occurrence: &Occurrence,
        note: Option<String>,
    ) -> Result<TaskView> {
        self.change_status(occurrence, StatusChange::Fail, note).await
    }

    /// Returns a completed or failed occurrence to pending.
    pub async fn undo(&self, occurrence: &Occurrence) -> Result<TaskView> {
        self.change_status(occurrence, StatusChange::Undo, None).await
    }

    /// Replaces the note of a failed occurrence.
    pub async fn save_failure_note(
        &self,
        occurrence: &Occurrence,
        note: impl Into<String>,
    ) -> Result<TaskView> {
        self.change_status(occurrence, StatusChange::Note, Some(note.into()))
            .await
    }
}
