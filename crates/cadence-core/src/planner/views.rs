//! Day and week projections.

use jiff::civil::DateTime;

use super::Planner;
use crate::{
    engine::{
        calendar::{date_key, week_dates, week_range_label},
        filter::visible_tasks,
        resolver::{annotate, happening_now, tally},
        time::minute_of_day,
    },
    error::Result,
    models::{DayView, Schedule, StatusBook, TaskView, WeekDaySummary, WeekView, Weekday},
    params::{ViewDay, ViewWeek},
};

/// Projects one weekday of one week at the instant `now`.
pub(crate) fn project_day(
    schedule: &Schedule,
    statuses: &StatusBook,
    weekday: Weekday,
    week_offset: i32,
    now: DateTime,
) -> DayView {
    let dates = week_dates(now.date(), week_offset);
    let date = dates[weekday.index()];
    let is_today = date == now.date();
    let now_minutes = minute_of_day(now.time());
    let key = date_key(date);

    let tasks: Vec<TaskView> = visible_tasks(schedule.tasks_for(weekday), week_offset)
        .into_iter()
        .map(|task| annotate(task, statuses.get(&key, &task.id), now_minutes, is_today))
        .collect();
    let stats = tally(&tasks);
    let happening_now = happening_now(&tasks).cloned();

    DayView {
        weekday,
        date,
        week_offset,
        week_label: week_range_label(&dates),
        is_today,
        tasks,
        stats,
        happening_now,
    }
}

/// Projects the seven days of a week at the instant `now`.
pub(crate) fn project_week(
    schedule: &Schedule,
    statuses: &StatusBook,
    week_offset: i32,
    now: DateTime,
) -> WeekView {
    let dates = week_dates(now.date(), week_offset);
    let days = Weekday::ALL
        .into_iter()
        .map(|weekday| {
            let day = project_day(schedule, statuses, weekday, week_offset, now);
            WeekDaySummary {
                weekday,
                date: day.date,
                is_today: day.is_today,
                stats: day.stats,
            }
        })
        .collect();

    WeekView {
        week_offset,
        label: week_range_label(&dates),
        days,
    }
}

impl Planner {
    /// Week overview: dates, label and per-day counts.
    pub async fn week(&self, params: &ViewWeek) -> Result<WeekView> {
        let week_offset = params.week_offset;
        let now = self.now();
        self.with_db(move |db| {
            let schedule = db.load_schedule()?;
            let statuses = db.load_statuses()?;
            Ok(project_week(&schedule, &statuses, week_offset, now))
        })
        .await
    }

    /// One day of a week with every visible task annotated. Without a
    /// weekday, shows today's weekday.
    pub async fn day(&self, params: &ViewDay) -> Result<DayView> {
        let now = self.now();
        let weekday = params.weekday.unwrap_or_else(|| Weekday::of(now.date()));
        let week_offset = params.week_offset;
        self.with_db(move |db| {
            let schedule = db.load_schedule()?;
            let statuses = db.load_statuses()?;
            Ok(project_day(&schedule, &statuses, weekday, week_offset, now))
        })
        .await
    }
}
