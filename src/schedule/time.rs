//! Time-of-day parsing for ordering entries within a day.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIME_RANGE: Regex =
        Regex::new(r"([0-9]{1,2})[:.]([0-9]{2})\s*[-–]\s*([0-9]{1,2})[:.]([0-9]{2})").unwrap();
    static ref SINGLE_TIME: Regex = Regex::new(r"([0-9]{1,2})[:.]([0-9]{2})").unwrap();
}

/// Parse the start of a time cell into minutes since midnight.
///
/// A range such as `06:30 - 08:00` yields its start; otherwise the first
/// `H:MM` or `H.MM` in the text is used. Out-of-range hours or minutes
/// reject the match. Returns `None` for unparseable text.
///
/// # Examples
///
/// ```
/// use routine_extract::schedule::parse_time_value;
///
/// assert_eq!(parse_time_value("06:30 - 08:00"), Some(390));
/// assert_eq!(parse_time_value("6.30"), Some(390));
/// assert_eq!(parse_time_value("25:00"), None);
/// ```
pub fn parse_time_value(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    TIME_RANGE
        .captures(text)
        .and_then(|caps| minutes(&caps[1], &caps[2]))
        .or_else(|| {
            SINGLE_TIME
                .captures(text)
                .and_then(|caps| minutes(&caps[1], &caps[2]))
        })
}

fn minutes(hour: &str, minute: &str) -> Option<u32> {
    let h: u32 = hour.parse().ok()?;
    let m: u32 = minute.parse().ok()?;
    if h <= 23 && m <= 59 {
        Some(h * 60 + m)
    } else {
        None
    }
}
