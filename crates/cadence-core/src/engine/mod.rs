//! Pure scheduling engine.
//!
//! Everything here is a function of stored data and the current time. None
//! of it touches storage; the [`Planner`](crate::planner::Planner) reads and
//! writes records around these calls.
//!
//! - [`calendar`]: dates and labels of a week offset
//! - [`filter`]: tasks visible in a given week
//! - [`time`]: "HH:MM" parsing and time-of-day predicates
//! - [`resolver`]: display status derivation and the status state machine
//! - [`chain`]: start time for a task chained after a day's last one

pub mod calendar;
pub mod chain;
pub mod filter;
pub mod resolver;
pub mod time;

pub use resolver::StatusAction;
