//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::{engine::calendar::month_day_label, models::Weekday};

/// A calendar date shown as `Monday, Mar 11`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", Weekday::of(self.0), month_day_label(self.0))
    }
}

/// A week offset described relative to the current week.
///
/// # Examples
///
/// ```rust
/// use cadence_core::display::RelativeWeek;
///
/// assert_eq!(RelativeWeek(0).to_string(), "this week");
/// assert_eq!(RelativeWeek(1).to_string(), "next week");
/// assert_eq!(RelativeWeek(-3).to_string(), "3 weeks ago");
/// ```
pub struct RelativeWeek(pub i32);

impl fmt::Display for RelativeWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("this week"),
            1 => f.write_str("next week"),
            -1 => f.write_str("last week"),
            n if n > 1 => write!(f, "in {n} weeks"),
            n => write!(f, "{} weeks ago", n.unsigned_abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_long_date() {
        assert_eq!(LongDate(date(2024, 3, 11)).to_string(), "Monday, Mar 11");
    }

    #[test]
    fn test_relative_week() {
        assert_eq!(RelativeWeek(-1).to_string(), "last week");
        assert_eq!(RelativeWeek(4).to_string(), "in 4 weeks");
        assert_eq!(RelativeWeek(i32::MIN).to_string(), "2147483648 weeks ago");
    }
}
