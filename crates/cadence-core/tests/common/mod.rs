use cadence_core::{Planner, PlannerBuilder};
use jiff::civil::{date, DateTime};
use tempfile::TempDir;

/// Monday 2024-03-11, 09:30
pub fn monday_morning() -> DateTime {
    date(2024, 3, 11).at(9, 30, 0, 0)
}

/// Helper function to create a test planner pinned to `now`
pub async fn create_test_planner_at(now: DateTime) -> (TempDir, Planner) {
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

/// Helper function to create a test planner on a Monday morning
#[allow(dead_code)]
pub async fn create_test_planner() -> (TempDir, Planner) {
    create_test_planner_at(monday_morning()).await
}
