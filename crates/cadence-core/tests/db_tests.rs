use cadence_core::{
    db::keys,
    models::{StatusBook, StoredStatus, TaskStatus},
    Database, Schedule, Task, Weekday,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn create_test_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: "Anatomy lecture".to_string(),
        start_time: "09:00".to_string(),
        end_time: "11:00".to_string(),
        details: "Room B12".to_string(),
        is_urgent: false,
        is_recurring: true,
        week_offset: None,
        category: None,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_schema_initialization_is_repeatable() {
    let (temp_file, db) = create_test_db();
    db.set_value("k", "v").expect("Failed to write value");
    drop(db);

    let reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(reopened.get_value("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn test_raw_values() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.get_value("missing").unwrap(), None);

    db.set_value("greeting", "hello").unwrap();
    db.set_value("greeting", "hi").unwrap();
    assert_eq!(db.get_value("greeting").unwrap().as_deref(), Some("hi"));

    assert!(db.remove_value("greeting").unwrap());
    assert!(!db.remove_value("greeting").unwrap());
    assert_eq!(db.get_value("greeting").unwrap(), None);
}

#[test]
fn test_empty_store_reads_as_empty_records() {
    let (_temp_file, db) = create_test_db();

    assert_eq!(db.load_schedule().unwrap(), Schedule::new());
    assert!(db.load_statuses().unwrap().is_empty());
    assert!(db.load_study_plan().unwrap().is_none());
    assert!(db.load_api_key().unwrap().is_none());
    assert!(db.load_week_key().unwrap().is_none());
}

#[test]
fn test_schedule_round_trip_uses_weekday_map() {
    let (_temp_file, db) = create_test_db();
    let schedule = Schedule::new().with_task_added(Weekday::Thursday, create_test_task("1"));

    db.save_schedule(&schedule).unwrap();
    assert_eq!(db.load_schedule().unwrap(), schedule);

    let raw = db.get_value(keys::SCHEDULE).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["Thursday"][0]["startTime"], "09:00");
}

#[test]
fn test_statuses_round_trip() {
    let (_temp_file, db) = create_test_db();
    let mut book = StatusBook::new();
    book.insert(TaskStatus {
        task_id: "1".to_string(),
        date: "2024-03-14".to_string(),
        status: StoredStatus::Failed,
        failure_note: Some("overslept".to_string()),
    });

    db.save_statuses(&book).unwrap();
    let loaded = db.load_statuses().unwrap();
    let record = loaded.get("2024-03-14", "1").expect("Status should exist");
    assert_eq!(record.status, StoredStatus::Failed);
    assert_eq!(record.failure_note.as_deref(), Some("overslept"));
}

#[test]
fn test_corrupt_records_read_as_empty() {
    let (_temp_file, db) = create_test_db();
    db.set_value(keys::SCHEDULE, "{not json").unwrap();
    db.set_value(keys::TASK_STATUSES, "[1, 2, 3]").unwrap();
    db.set_value(keys::STUDY_PLAN, r#"{"days": "soon"}"#).unwrap();

    assert_eq!(db.load_schedule().unwrap(), Schedule::new());
    assert!(db.load_statuses().unwrap().is_empty());
    assert!(db.load_study_plan().unwrap().is_none());
}

#[test]
fn test_null_study_plan_reads_as_none() {
    let (_temp_file, db) = create_test_db();
    db.set_value(keys::STUDY_PLAN, "null").unwrap();
    assert!(db.load_study_plan().unwrap().is_none());
    assert!(db.clear_study_plan().unwrap());
    assert!(!db.clear_study_plan().unwrap());
}

#[test]
fn test_string_records() {
    let (_temp_file, db) = create_test_db();
    db.save_api_key("sk-test").unwrap();
    db.save_week_key("week-2024-2-11").unwrap();

    assert_eq!(db.load_api_key().unwrap().as_deref(), Some("sk-test"));
    assert_eq!(db.load_week_key().unwrap().as_deref(), Some("week-2024-2-11"));
    // Stored as JSON strings
    assert_eq!(
        db.get_value(keys::API_KEY).unwrap().as_deref(),
        Some("\"sk-test\"")
    );
}
