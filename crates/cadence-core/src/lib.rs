//! Core library for the Cadence weekly planner.
//!
//! Cadence keeps two independent planning models:
//!
//! - a manual weekly [`Schedule`](models::Schedule) of recurring and one-off
//!   tasks, with per-occurrence status tracking
//! - an AI-generated [`StudyPlan`](models::StudyPlan) of free-form sessions
//!
//! The [`engine`] derives everything time-dependent (which dates a week
//! covers, which tasks are visible, active, upcoming or in progress) as pure
//! functions of stored data and the current time. The [`Planner`] facade
//! loads records from SQLite, runs the engine and writes changes back.
//! Models render as markdown through [`display`].
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{
//!     models::Weekday,
//!     params::{AddTask, Occurrence, ViewWeek},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("cadence.db")))
//!     .build()
//!     .await?;
//!
//! let task = planner
//!     .add_task(&AddTask::new(Weekday::Monday, "Gym").at("07:00", "08:00").recurring())
//!     .await?;
//!
//! planner
//!     .mark_done(&Occurrence {
//!         weekday: Weekday::Monday,
//!         task_id: task.id.clone(),
//!         week_offset: 0,
//!     })
//!     .await?;
//!
//! let week = planner.week(&ViewWeek { week_offset: 0 }).await?;
//! println!("{week}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;

pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use error::{CadenceError, Result};
pub use generator::{GenerationError, OpenAiClient, StudyPlanGenerator};
pub use models::{
    Category, DayView, DisplayStatus, Schedule, StudyPlan, Task, TaskView, WeekView, Weekday,
};
pub use params::{AddTask, Occurrence, TaskRef, UpdateTaskStatus, ViewDay, ViewWeek};
pub use planner::{Planner, PlannerBuilder};
