//! Tests for the planner module.

use jiff::civil::{date, DateTime};
use tempfile::TempDir;

use super::{schedule_ops::build_task, views::project_day, *};
use crate::{
    models::{DisplayStatus, Schedule, StatusBook, StoredStatus, Task, TaskStatus, Weekday},
    params::{AddTask, Occurrence, SessionRef, TaskRef, UpdateSession, ViewDay, ViewWeek},
};

/// Monday 2024-03-11, 09:30
fn monday_morning() -> DateTime {
    date(2024, 3, 11).at(9, 30, 0, 0)
}

/// Helper function to create a test planner pinned to `now`
async fn create_test_planner_at(now: DateTime) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_fixed_time(Some(now))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn create_test_planner() -> (TempDir, Planner) {
    create_test_planner_at(monday_morning()).await
}

fn occurrence(weekday: Weekday, task_id: &str, week_offset: i32) -> Occurrence {
    Occurrence {
        weekday,
        task_id: task_id.to_string(),
        week_offset,
    }
}

fn stored_task(id: &str, start: &str, end: &str, recurring: bool, offset: Option<i32>) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        start_time: start.to_string(),
        end_time: end.to_string(),
        details: String::new(),
        is_urgent: false,
        is_recurring: recurring,
        week_offset: offset,
        category: None,
    }
}

#[test]
fn test_project_day_recurring_task_in_every_week() {
    let schedule = Schedule::new().with_task_added(
        Weekday::Monday,
        stored_task("1", "09:00", "10:00", true, None),
    );
    let statuses = StatusBook::new();

    for offset in [0, 5] {
        let day = project_day(&schedule, &statuses, Weekday::Monday, offset, monday_morning());
        assert_eq!(day.tasks.len(), 1, "offset {offset}");
        assert_eq!(day.tasks[0].task.id, "1");
    }
}

#[test]
fn test_project_day_one_off_only_in_its_week() {
    let schedule = Schedule::new().with_task_added(
        Weekday::Wednesday,
        stored_task("2", "09:00", "10:00", false, Some(2)),
    );
    let statuses = StatusBook::new();

    let this_week = project_day(&schedule, &statuses, Weekday::Wednesday, 0, monday_morning());
    assert!(this_week.tasks.is_empty());

    let in_two = project_day(&schedule, &statuses, Weekday::Wednesday, 2, monday_morning());
    assert_eq!(in_two.tasks.len(), 1);
    assert_eq!(in_two.date, date(2024, 3, 27));
    assert!(!in_two.is_today);
}

#[test]
fn test_project_day_legacy_task_without_offset_in_every_week() {
    let schedule = Schedule::new().with_task_added(
        Weekday::Thursday,
        stored_task("legacy", "18:00", "19:00", false, None),
    );
    let statuses = StatusBook::new();

    for offset in [-1, 0, 1, 5] {
        let day = project_day(&schedule, &statuses, Weekday::Thursday, offset, monday_morning());
        assert_eq!(day.tasks.len(), 1, "legacy task missing at week offset {offset}");
    }
}

#[test]
fn test_project_day_in_progress_only_today() {
    let schedule = Schedule::new()
        .with_task_added(Weekday::Monday, stored_task("1", "09:00", "10:00", true, None))
        .with_task_added(Weekday::Tuesday, stored_task("2", "09:00", "10:00", true, None));
    let statuses = StatusBook::new();

    let today = project_day(&schedule, &statuses, Weekday::Monday, 0, monday_morning());
    assert!(today.is_today);
    assert_eq!(today.tasks[0].status, DisplayStatus::InProgress);
    assert!(today.tasks[0].is_active);
    assert_eq!(today.happening_now.as_ref().map(|t| t.id.as_str()), Some("1"));

    let next_monday = project_day(&schedule, &statuses, Weekday::Monday, 1, monday_morning());
    assert_eq!(next_monday.tasks[0].status, DisplayStatus::Pending);
    assert!(next_monday.happening_now.is_none());

    let tomorrow = project_day(&schedule, &statuses, Weekday::Tuesday, 0, monday_morning());
    assert_eq!(tomorrow.tasks[0].status, DisplayStatus::Pending);
    assert!(!tomorrow.tasks[0].is_active);
}

#[test]
fn test_project_day_reads_status_of_the_concrete_date() {
    let schedule = Schedule::new()
        .with_task_added(Weekday::Monday, stored_task("1", "07:00", "08:00", true, None));
    let mut statuses = StatusBook::new();
    statuses.insert(TaskStatus {
        task_id: "1".to_string(),
        date: "2024-03-11".to_string(),
        status: StoredStatus::Completed,
        failure_note: None,
    });

    let this_week = project_day(&schedule, &statuses, Weekday::Monday, 0, monday_morning());
    assert_eq!(this_week.tasks[0].status, DisplayStatus::Completed);
    assert_eq!(this_week.stats.completed, 1);

    let last_week = project_day(&schedule, &statuses, Weekday::Monday, -1, monday_morning());
    assert_eq!(last_week.tasks[0].status, DisplayStatus::Pending);
}

#[test]
fn test_build_task_chains_after_visible_tasks() {
    let schedule = Schedule::new()
        .with_task_added(Weekday::Monday, stored_task("1", "08:00", "10:57", true, None))
        // Only visible in week 3, so ignored for a week 0 chain
        .with_task_added(Weekday::Monday, stored_task("2", "12:00", "13:00", false, Some(3)));

    let mut draft = AddTask::new(Weekday::Monday, "Review");
    draft.chain_to_previous = true;
    draft.end_time = "12:00".to_string();

    let task = build_task(&schedule, draft).unwrap();
    assert_eq!(task.start_time, "11:02");
    assert_eq!(task.end_time, "12:00");
    assert_eq!(task.week_offset, Some(0));
}

#[test]
fn test_build_task_chain_on_empty_day_is_rejected() {
    let mut draft = AddTask::new(Weekday::Sunday, "Review").at("09:00", "10:00");
    draft.chain_to_previous = true;

    let err = build_task(&Schedule::new(), draft).unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { field, .. } if field == "start_time"));
}

#[test]
fn test_build_task_normalizes_and_sets_offsets() {
    let mut draft = AddTask::new(Weekday::Monday, "  Gym  ").at("7:05", "8:00");
    draft.week_offset = 4;
    let one_off = build_task(&Schedule::new(), draft.clone()).unwrap();
    assert_eq!(one_off.title, "Gym");
    assert_eq!(one_off.start_time, "07:05");
    assert_eq!(one_off.end_time, "08:00");
    assert_eq!(one_off.week_offset, Some(4));

    draft.is_recurring = true;
    let recurring = build_task(&Schedule::new(), draft).unwrap();
    assert_eq!(recurring.week_offset, None);
}

#[test]
fn test_build_task_same_as_start_and_bad_times() {
    let mut point = AddTask::new(Weekday::Monday, "Pill").at("08:00", "");
    point.same_as_start = true;
    let task = build_task(&Schedule::new(), point).unwrap();
    assert_eq!(task.end_time, "08:00");
    assert!(task.is_point_event());

    let bad = AddTask::new(Weekday::Monday, "Gym").at("7am", "8am");
    assert!(matches!(
        build_task(&Schedule::new(), bad),
        Err(CadenceError::InvalidInput { .. })
    ));
}

#[test]
fn test_build_task_ids_are_unique() {
    let mut schedule = Schedule::new();
    let mut ids = Vec::new();
    for _ in 0..5 {
        let task = build_task(&schedule, AddTask::new(Weekday::Monday, "Gym").at("07:00", "08:00"))
            .unwrap();
        ids.push(task.id.clone());
        schedule = schedule.with_task_added(Weekday::Monday, task);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_add_and_view_day() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .add_task(&AddTask::new(Weekday::Monday, "Lecture").at("13:00", "15:00").recurring())
        .await
        .expect("Failed to add task");
    planner
        .add_task(&AddTask::new(Weekday::Monday, "Gym").at("07:00", "08:00"))
        .await
        .expect("Failed to add task");

    let day = planner
        .day(&ViewDay {
            weekday: None,
            week_offset: 0,
        })
        .await
        .expect("Failed to load day");

    assert_eq!(day.weekday, Weekday::Monday);
    assert!(day.is_today);
    assert_eq!(day.week_label, "Mar 11 - Mar 17");
    let titles: Vec<_> = day.tasks.iter().map(|t| t.task.title.as_str()).collect();
    assert_eq!(titles, ["Gym", "Lecture"]);
    assert!(day.tasks[0].is_past);
    assert_eq!(day.stats.pending, 2);

    // The one-off task is gone next week
    let next_week = planner
        .day(&ViewDay {
            weekday: Some(Weekday::Monday),
            week_offset: 1,
        })
        .await
        .expect("Failed to load day");
    assert_eq!(next_week.tasks.len(), 1);
}

#[tokio::test]
async fn test_delete_task() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner
        .add_task(&AddTask::new(Weekday::Friday, "Lab").at("10:00", "12:00"))
        .await
        .expect("Failed to add task");

    let deleted = planner
        .delete_task(&TaskRef {
            weekday: Weekday::Friday,
            task_id: task.id.clone(),
        })
        .await
        .expect("Failed to delete task");
    assert_eq!(deleted, Some(task.clone()));

    let again = planner
        .delete_task(&TaskRef {
            weekday: Weekday::Friday,
            task_id: task.id,
        })
        .await
        .expect("Deleting twice should not fail");
    assert_eq!(again, None);
}

#[tokio::test]
async fn test_status_lifecycle() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner
        .add_task(&AddTask::new(Weekday::Monday, "Lecture").at("09:00", "10:00").recurring())
        .await
        .expect("Failed to add task");
    let today = occurrence(Weekday::Monday, &task.id, 0);

    let done = planner.mark_done(&today).await.expect("Failed to mark done");
    assert_eq!(done.status, DisplayStatus::Completed);

    // Undo lands on literal pending in storage; the read re-derives in-progress
    let undone = planner.undo(&today).await.expect("Failed to undo");
    assert_eq!(undone.status, DisplayStatus::InProgress);

    let failed = planner
        .mark_failed(&today, Some("fire alarm".to_string()))
        .await
        .expect("Failed to mark failed");
    assert_eq!(failed.status, DisplayStatus::Failed);
    assert_eq!(failed.failure_note.as_deref(), Some("fire alarm"));

    let edited = planner
        .save_failure_note(&today, "fire drill, not alarm")
        .await
        .expect("Failed to save note");
    assert_eq!(edited.failure_note.as_deref(), Some("fire drill, not alarm"));

    // Next week's occurrence is untouched
    let next_week = planner
        .day(&ViewDay {
            weekday: Some(Weekday::Monday),
            week_offset: 1,
        })
        .await
        .expect("Failed to load day");
    assert_eq!(next_week.tasks[0].status, DisplayStatus::Pending);
}

#[tokio::test]
async fn test_status_rejects_invalid_changes() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner
        .add_task(&AddTask::new(Weekday::Tuesday, "Quiz").at("09:00", "10:00"))
        .await
        .expect("Failed to add task");

    let err = planner
        .undo(&occurrence(Weekday::Tuesday, &task.id, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::InvalidTransition { .. }));

    let err = planner
        .mark_done(&occurrence(Weekday::Wednesday, &task.id, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::TaskNotFound { .. }));

    // One-off task does not exist in another week
    let err = planner
        .mark_done(&occurrence(Weekday::Tuesday, &task.id, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::TaskNotFound { .. }));
}

#[tokio::test]
async fn test_legacy_task_status_changes_outside_current_week() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .with_db(|db| {
            let schedule = Schedule::new().with_task_added(
                Weekday::Friday,
                stored_task("legacy", "08:00", "09:00", false, None),
            );
            db.save_schedule(&schedule)
        })
        .await
        .expect("Failed to seed schedule");

    let next_week = occurrence(Weekday::Friday, "legacy", 1);
    let done = planner.mark_done(&next_week).await.expect("Failed to mark done");
    assert_eq!(done.status, DisplayStatus::Completed);

    let last_week = occurrence(Weekday::Friday, "legacy", -1);
    let failed = planner
        .mark_failed(&last_week, None)
        .await
        .expect("Failed to mark failed");
    assert_eq!(failed.status, DisplayStatus::Failed);
}

#[tokio::test]
async fn test_week_overview_counts() {
    let (_temp_dir, planner) = create_test_planner().await;
    let task = planner
        .add_task(&AddTask::new(Weekday::Monday, "Lecture").at("08:00", "09:00").recurring())
        .await
        .expect("Failed to add task");
    planner
        .add_task(&AddTask::new(Weekday::Thursday, "Shift").at("18:00", "23:00").recurring())
        .await
        .expect("Failed to add task");
    planner
        .mark_done(&occurrence(Weekday::Monday, &task.id, 0))
        .await
        .expect("Failed to mark done");

    let week = planner
        .week(&ViewWeek { week_offset: 0 })
        .await
        .expect("Failed to load week");
    assert_eq!(week.label, "Mar 11 - Mar 17");
    assert_eq!(week.days.len(), 7);
    assert!(week.days[0].is_today);
    assert_eq!(week.days[0].stats.completed, 1);
    assert_eq!(week.days[3].stats.total, 1);
    assert_eq!(week.days[6].stats.total, 0);
}

fn sample_plan() -> crate::models::StudyPlan {
    use crate::models::{PlanDay, PlanStats, Session, StudyPlan};

    StudyPlan {
        urgent: vec![],
        days: Weekday::ALL
            .iter()
            .map(|day| PlanDay {
                day: day.to_string(),
                date: String::new(),
                sessions: vec![Session::default()],
            })
            .collect(),
        stats: PlanStats {
            total_hours: 7.0,
            subjects: vec![],
        },
        tips: vec![],
    }
}

#[tokio::test]
async fn test_study_plan_session_editing() {
    let (_temp_dir, planner) = create_test_planner().await;

    assert!(matches!(
        planner.add_session(Weekday::Monday).await.unwrap_err(),
        CadenceError::NoStudyPlan
    ));

    planner
        .save_study_plan(&sample_plan())
        .await
        .expect("Failed to save plan");

    let day = planner
        .add_session(Weekday::Tuesday)
        .await
        .expect("Failed to add session");
    assert_eq!(day.sessions.len(), 2);

    let updated = planner
        .update_session(UpdateSession {
            session: SessionRef {
                day: Weekday::Tuesday,
                number: 2,
            },
            time: Some("14:00-16:00".to_string()),
            kind: None,
            title: Some("Pharmacology".to_string()),
            icon: None,
            focus: None,
        })
        .await
        .expect("Failed to update session");
    assert_eq!(updated.resource.title, "Pharmacology");
    assert_eq!(updated.changes.len(), 2);

    let removed = planner
        .delete_session(&SessionRef {
            day: Weekday::Tuesday,
            number: 1,
        })
        .await
        .expect("Failed to delete session");
    assert_eq!(removed.title, "New Session");

    let plan = planner.study_plan().await.unwrap().unwrap();
    assert_eq!(plan.days[1].sessions.len(), 1);
    assert_eq!(plan.days[1].sessions[0].title, "Pharmacology");

    let err = planner
        .delete_session(&SessionRef {
            day: Weekday::Tuesday,
            number: 0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::SessionNotFound { .. }));
}

#[tokio::test]
async fn test_save_study_plan_rejects_wrong_shape() {
    let (_temp_dir, planner) = create_test_planner().await;
    let mut plan = sample_plan();
    plan.days.truncate(3);
    assert!(planner.save_study_plan(&plan).await.is_err());
    assert!(planner.study_plan().await.unwrap().is_none());
}

#[tokio::test]
async fn test_api_key_validation() {
    let (_temp_dir, planner) = create_test_planner().await;
    assert!(planner.set_api_key("abc123").await.is_err());
    assert_eq!(planner.api_key().await.unwrap(), None);

    planner.set_api_key(" sk-test ").await.expect("Failed to save key");
    assert_eq!(planner.api_key().await.unwrap().as_deref(), Some("sk-test"));
}

#[tokio::test]
async fn test_week_rollover_clears_only_the_plan() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner_at = |now: DateTime| {
        PlannerBuilder::new()
            .with_database_path(Some(&db_path))
            .with_fixed_time(Some(now))
            .build()
    };

    let monday = planner_at(monday_morning()).await.unwrap();
    assert!(!monday.check_week_rollover().await.unwrap());
    monday.save_study_plan(&sample_plan()).await.unwrap();
    monday
        .add_task(&AddTask::new(Weekday::Monday, "Gym").at("07:00", "08:00").recurring())
        .await
        .unwrap();

    // Sunday is still the same week
    let sunday = planner_at(date(2024, 3, 17).at(22, 0, 0, 0)).await.unwrap();
    assert!(!sunday.check_week_rollover().await.unwrap());
    assert!(sunday.study_plan().await.unwrap().is_some());

    let next_monday = planner_at(date(2024, 3, 18).at(6, 0, 0, 0)).await.unwrap();
    assert!(next_monday.check_week_rollover().await.unwrap());
    assert!(next_monday.study_plan().await.unwrap().is_none());
    assert!(!next_monday.check_week_rollover().await.unwrap());

    let day = next_monday
        .day(&ViewDay {
            weekday: Some(Weekday::Monday),
            week_offset: 0,
        })
        .await
        .unwrap();
    assert_eq!(day.tasks.len(), 1);
}
