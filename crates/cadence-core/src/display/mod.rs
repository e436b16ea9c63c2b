//! Markdown rendering of models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); operation
//! outcomes are wrapped in result types so the same resource can be reported
//! as created, updated or deleted.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Result Types   │    │    Markdown     │
//! │ (DayView, Task) │───▶│ (CreateResult,  │───▶│ (Terminal/MCP)  │
//! │                 │    │  UpdateResult)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LongDate, RelativeWeek
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Study plan cleared");
//! assert_eq!(status.to_string(), "Success: Study plan cleared\n");
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::{LongDate, RelativeWeek};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
