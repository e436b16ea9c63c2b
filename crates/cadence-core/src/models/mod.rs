//! Data models for the weekly schedule, task statuses and study plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! Two planning models coexist and never interoperate:
//!
//! - **Manual schedule**: [`Schedule`] of [`Task`]s per [`Weekday`], with
//!   per-occurrence [`TaskStatus`] records collected in a [`StatusBook`]
//! - **Study plan**: an AI-generated [`StudyPlan`] of free-form sessions
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Schedule, Task, Weekday};
//!
//! let task = Task {
//!     id: "1".to_string(),
//!     title: "Anatomy lecture".to_string(),
//!     start_time: "09:00".to_string(),
//!     end_time: "10:00".to_string(),
//!     details: String::new(),
//!     is_urgent: false,
//!     is_recurring: true,
//!     week_offset: None,
//!     category: None,
//! };
//!
//! let schedule = Schedule::new().with_task_added(Weekday::Monday, task);
//! assert_eq!(schedule.tasks_for(Weekday::Monday).len(), 1);
//! assert!(schedule.tasks_for(Weekday::Tuesday).is_empty());
//! ```

pub mod category;
pub mod schedule;
pub mod status;
pub mod study_plan;
pub mod task;
pub mod view;
pub mod weekday;


pub use category::Category;
pub use schedule::Schedule;
pub use status::{DisplayStatus, StatusBook, StoredStatus, TaskStatus};
pub use study_plan::{
    PlanDay, PlanStats, Priority, Session, SessionKind, SessionPatch, StudyPlan, Subject,
    UrgentTask, PLAN_DAYS,
};
pub use task::Task;
pub use view::{DayStats, DayView, TaskView, WeekDaySummary, WeekView};
pub use weekday::Weekday;
