//! Week projection: which calendar dates a week offset covers.

use jiff::{civil::Date, Span};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Largest day count a jiff `Span` accepts.
const MAX_SPAN_DAYS: i64 = 7_304_484;

/// Moves a date by whole days, saturating at the supported calendar range.
fn shift_days(date: Date, days: i64) -> Date {
    date.saturating_add(Span::new().days(days.clamp(-MAX_SPAN_DAYS, MAX_SPAN_DAYS)))
}

/// Monday of the week containing `today`.
///
/// A Sunday belongs to the week that started six days earlier.
pub fn current_monday(today: Date) -> Date {
    // 0 = Sunday … 6 = Saturday
    let weekday = i64::from(today.weekday().to_sunday_zero_offset());
    let diff = if weekday == 0 { -6 } else { 1 - weekday };
    shift_days(today, diff)
}

/// The seven dates, Monday through Sunday, of the week `week_offset` weeks
/// away from the one containing `today`.
///
/// # Examples
///
/// ```rust
/// use cadence_core::engine::calendar::week_dates;
/// use jiff::civil::date;
///
/// // Wednesday 2024-03-13
/// let dates = week_dates(date(2024, 3, 13), 1);
/// assert_eq!(dates[0], date(2024, 3, 18));
/// assert_eq!(dates[6], date(2024, 3, 24));
/// ```
pub fn week_dates(today: Date, week_offset: i32) -> [Date; 7] {
    let monday = shift_days(current_monday(today), i64::from(week_offset) * 7);
    std::array::from_fn(|i| shift_days(monday, i as i64))
}

/// Short "Mon D" rendering of a date, e.g. `Mar 9`.
pub fn month_day_label(date: Date) -> String {
    format!("{} {}", MONTHS_SHORT[(date.month() - 1) as usize], date.day())
}

/// Label of a projected week, e.g. `Mar 11 - Mar 17`.
pub fn week_range_label(dates: &[Date; 7]) -> String {
    format!(
        "{} - {}",
        month_day_label(dates[0]),
        month_day_label(dates[6])
    )
}

/// ISO `YYYY-MM-DD` key identifying a concrete date.
pub fn date_key(date: Date) -> String {
    date.strftime("%Y-%m-%d").to_string()
}

/// Identifier of the real-world week containing `today`, used to detect a
/// week rollover.
///
/// The month component is zero-based (`week-2024-2-11` is Monday March 11)
/// so keys written by earlier versions of the planner keep matching.
pub fn week_key(today: Date) -> String {
    let monday = current_monday(today);
    format!(
        "week-{}-{}-{}",
        monday.year(),
        monday.month() - 1,
        monday.day()
    )
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, Weekday};

    use super::*;

    #[test]
    fn test_current_monday_midweek() {
        assert_eq!(current_monday(date(2024, 3, 13)), date(2024, 3, 11));
    }

    #[test]
    fn test_current_monday_on_monday_is_same_day() {
        assert_eq!(current_monday(date(2024, 3, 11)), date(2024, 3, 11));
    }

    #[test]
    fn test_current_monday_on_sunday_goes_back_six_days() {
        assert_eq!(current_monday(date(2024, 3, 17)), date(2024, 3, 11));
    }

    #[test]
    fn test_week_dates_are_consecutive_from_monday() {
        for offset in [-60, -3, -1, 0, 1, 2, 52, 520] {
            let dates = week_dates(date(2024, 2, 29), offset);
            assert_eq!(dates[0].weekday(), Weekday::Monday, "offset {offset}");
            for pair in dates.windows(2) {
                assert_eq!(pair[0].tomorrow().unwrap(), pair[1]);
            }
        }
    }

    #[test]
    fn test_next_week_starts_seven_days_later() {
        let today = date(2024, 12, 30);
        for offset in -10..10 {
            let this_week = week_dates(today, offset);
            let next_week = week_dates(today, offset + 1);
            assert_eq!(shift_days(this_week[0], 7), next_week[0]);
        }
    }

    #[test]
    fn test_week_dates_cross_year_boundary() {
        let dates = week_dates(date(2025, 1, 1), 0);
        assert_eq!(dates[0], date(2024, 12, 30));
        assert_eq!(dates[6], date(2025, 1, 5));
    }

    #[test]
    fn test_extreme_offsets_do_not_panic() {
        let _ = week_dates(date(2024, 3, 13), i32::MAX);
        let _ = week_dates(date(2024, 3, 13), i32::MIN);
    }

    #[test]
    fn test_week_range_label() {
        let dates = week_dates(date(2024, 3, 13), 0);
        assert_eq!(week_range_label(&dates), "Mar 11 - Mar 17");

        let spanning = week_dates(date(2024, 4, 2), 0);
        assert_eq!(week_range_label(&spanning), "Apr 1 - Apr 7");

        let across_months = week_dates(date(2024, 2, 28), 0);
        assert_eq!(week_range_label(&across_months), "Feb 26 - Mar 3");
    }

    #[test]
    fn test_date_key_is_iso() {
        assert_eq!(date_key(date(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn test_week_key_uses_zero_based_month_of_monday() {
        assert_eq!(week_key(date(2024, 3, 13)), "week-2024-2-11");
        // Sunday still belongs to the previous Monday's week
        assert_eq!(week_key(date(2024, 3, 17)), "week-2024-2-11");
        assert_eq!(week_key(date(2024, 3, 18)), "week-2024-2-18");
    }
}
