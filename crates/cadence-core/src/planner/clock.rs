//! Source of "now" for the planner.

use jiff::{civil::DateTime, Zoned};

/// Wall clock used for every time-dependent derivation.
///
/// `System` reads the device's local time on each call. `Fixed` pins the
/// planner to one instant, which makes views reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime),
}

impl Clock {
    /// Current local date and time.
    pub fn now(&self) -> DateTime {
        match self {
            Clock::System => Zoned::now().datetime(),
            Clock::Fixed(instant) => *instant,
        }
    }
}
