//! "HH:MM" time-of-day helpers.
//!
//! Task times are stored as strings. Every helper here treats a string it
//! cannot parse as "no information": predicates return `false` and labels
//! come back empty, so a single malformed task never breaks a whole day view.

use jiff::civil::Time;

/// Minutes before its start during which a task counts as upcoming.
pub const UPCOMING_WINDOW_MINUTES: i32 = 60;

/// Minutes in a day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Hours must be in `0..=23` and minutes in `0..=59`. Anything after a second
/// colon (such as seconds) is ignored.
///
/// # Examples
///
/// ```rust
/// use cadence_core::engine::time::to_minutes;
///
/// assert_eq!(to_minutes("09:30"), Some(570));
/// assert_eq!(to_minutes("9:05"), Some(545));
/// assert_eq!(to_minutes("25:00"), None);
/// assert_eq!(to_minutes("noon"), None);
/// ```
pub fn to_minutes(time: &str) -> Option<i32> {
    let mut parts = time.trim().split(':');
    let hours: i32 = parts.next()?.trim().parse().ok()?;
    let minutes: i32 = parts.next()?.trim().parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `"HH:MM"`, wrapping past
/// midnight.
pub fn format_minutes(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Minutes since midnight of a wall-clock time.
pub fn minute_of_day(time: Time) -> i32 {
    i32::from(time.hour()) * 60 + i32::from(time.minute())
}

/// Whether `now` lies in `[start, end)`.
///
/// Point events (`start == end`) are never active.
pub fn is_active(start: &str, end: &str, now: i32) -> bool {
    match (to_minutes(start), to_minutes(end)) {
        (Some(start), Some(end)) => start <= now && now < end,
        _ => false,
    }
}

/// Whether the task starts within the next hour, exclusive of `now` itself.
pub fn is_upcoming(start: &str, now: i32) -> bool {
    to_minutes(start)
        .map(|start| {
            let until = start - now;
            until > 0 && until <= UPCOMING_WINDOW_MINUTES
        })
        .unwrap_or(false)
}

/// Whether the task ended strictly before `now`.
pub fn is_past(end: &str, now: i32) -> bool {
    to_minutes(end).map(|end| end < now).unwrap_or(false)
}

/// Whether the start time has been reached.
pub fn has_started(start: &str, now: i32) -> bool {
    to_minutes(start).map(|start| now >= start).unwrap_or(false)
}

/// Human countdown to `start`: `"in 1h 5m"`, `"in 2h"`, `"in 45m"`, or empty
/// when the start has already passed or cannot be parsed.
///
/// # Examples
///
/// ```rust
/// use cadence_core::engine::time::remaining_label;
///
/// assert_eq!(remaining_label("10:05", 9 * 60), "in 1h 5m");
/// assert_eq!(remaining_label("09:45", 9 * 60), "in 45m");
/// assert_eq!(remaining_label("08:00", 9 * 60), "");
/// ```
pub fn remaining_label(start: &str, now: i32) -> String {
    let Some(start) = to_minutes(start) else {
        return String::new();
    };
    let until = start - now;
    if until <= 0 {
        return String::new();
    }
    match (until / 60, until % 60) {
        (0, minutes) => format!("in {minutes}m"),
        (hours, 0) => format!("in {hours}h"),
        (hours, minutes) => format!("in {hours}h {minutes}m"),
    }
}
