//! Reference-day helpers.
//!
//! Planner days travel as `YYYY-MM-DD` strings and times are always anchored
//! to the midnight of such a day.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PlannerError;
use crate::features::quickadd::Meridiem;

/// Format used for day strings.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

static START_INPUT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "9", "9:30", "9:30pm", "9:30 pm"
    Regex::new(r"(?i)^([0-9]{1,2})(?::([0-9]{2}))?(?:\s?(am|pm|a|p))?$")
        .unwrap_or_else(|e| panic!("Invalid start input regex: {e}"))
});

/// Format a day as `YYYY-MM-DD`.
#[must_use]
pub fn to_day_string(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` day string.
///
/// # Errors
///
/// Returns `PlannerError::InvalidDay` if the string is not a valid calendar day.
pub fn from_day_string(input: &str) -> Result<NaiveDate, PlannerError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
        .map_err(|_| PlannerError::InvalidDay(trimmed.to_string()))
}

/// The current local calendar day.
#[must_use]
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Midnight of `day` plus `hours` and `minutes`.
///
/// Returns `None` only if the result would leave chrono's supported range.
#[must_use]
pub fn with_time(day: NaiveDate, hours: u32, minutes: u32) -> Option<NaiveDateTime> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(Duration::minutes(
        i64::from(hours) * 60 + i64::from(minutes),
    ))
}

/// Parse the contents of a single "start time" field.
///
/// Accepts `H`, `H:MM` and either of those followed by a meridiem, with or
/// without one space before it. Returns `None` for empty input, anything
/// that does not look like a time, or an hour/minute out of range.
#[must_use]
pub fn parse_start_input(input: &str, day: NaiveDate) -> Option<NaiveDateTime> {
    let caps = START_INPUT_PATTERN.captures(input.trim())?;
    let mut hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if let Some(meridiem) = caps.get(3).and_then(|m| Meridiem::from_marker(m.as_str())) {
        hours = meridiem.resolve(hours);
    }
    if hours > 23 || minutes > 59 {
        return None;
    }
    with_time(day, hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn test_day_string_round_trip() {
        assert_eq!(to_day_string(day()), "2024-05-02");
        assert_eq!(from_day_string("2024-05-02").unwrap(), day());
        assert_eq!(from_day_string(" 2024-05-02 ").unwrap(), day());
    }

    #[test]
    fn test_from_day_string_rejects_invalid() {
        assert!(matches!(
            from_day_string("2024-13-01"),
            Err(PlannerError::InvalidDay(_))
        ));
        assert!(from_day_string("tomorrow").is_err());
        assert!(from_day_string("").is_err());
    }

    #[test]
    fn test_with_time() {
        assert_eq!(with_time(day(), 16, 30), day().and_hms_opt(16, 30, 0));
        assert_eq!(with_time(day(), 0, 0), day().and_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_with_time_overflow_rolls_into_next_day() {
        let next = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        assert_eq!(with_time(day(), 24, 15), next.and_hms_opt(0, 15, 0));
    }

    #[test]
    fn test_parse_start_input_formats() {
        assert_eq!(parse_start_input("9", day()), day().and_hms_opt(9, 0, 0));
        assert_eq!(parse_start_input("14:45", day()), day().and_hms_opt(14, 45, 0));
        assert_eq!(parse_start_input("2:30 pm", day()), day().and_hms_opt(14, 30, 0));
        assert_eq!(parse_start_input("2:30pm", day()), day().and_hms_opt(14, 30, 0));
        assert_eq!(parse_start_input("12 a", day()), day().and_hms_opt(0, 0, 0));
        assert_eq!(parse_start_input(" 12:15 P ", day()), day().and_hms_opt(12, 15, 0));
    }

    #[test]
    fn test_parse_start_input_rejects() {
        assert_eq!(parse_start_input("", day()), None);
        assert_eq!(parse_start_input("25:00", day()), None);
        assert_eq!(parse_start_input("9:75", day()), None);
        assert_eq!(parse_start_input("9:30  pm", day()), None);
        assert_eq!(parse_start_input("noon", day()), None);
    }
}
