//! Day-of-week recognition and canonicalisation.
//!
//! Timetable cells spell days inconsistently: "Monday", "MON", "mon", or a
//! code squeezed against other text. Everything is reduced to a three-letter
//! uppercase code.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A day code or full day name bounded by ASCII word breaks.
    static ref DAY_WORD: Regex = Regex::new(
        r"(?-u:\b)(SUN|MON|TUE|WED|THU|FRI|SAT|SUNDAY|MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY|SATURDAY)(?-u:\b)"
    )
    .unwrap();

    /// A cell holding nothing but a day code or full day name.
    static ref DAY_TOKEN: Regex = Regex::new(
        r"^(SUN|MON|TUE|WED|THU|FRI|SAT|SUNDAY|MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY|SATURDAY)$"
    )
    .unwrap();

    /// A bare day code bounded by ASCII word breaks.
    static ref DAY_CODE_WORD: Regex = Regex::new(r"(?-u:\b)(SUN|MON|TUE|WED|THU|FRI|SAT)(?-u:\b)").unwrap();
}

/// Day of the week, in the order the schedule is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Sunday
    Sun,
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
}

impl Weekday {
    /// All days, SUN first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Three-letter uppercase code.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
        }
    }

    /// Uppercase full name.
    pub fn full_name(self) -> &'static str {
        match self {
            Weekday::Sun => "SUNDAY",
            Weekday::Mon => "MONDAY",
            Weekday::Tue => "TUESDAY",
            Weekday::Wed => "WEDNESDAY",
            Weekday::Thu => "THURSDAY",
            Weekday::Fri => "FRIDAY",
            Weekday::Sat => "SATURDAY",
        }
    }

    /// Parse an exact (case-sensitive) three-letter code.
    pub fn from_code(code: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|day| day.code() == code)
    }

    /// Parse an exact (case-sensitive) uppercase full name.
    pub fn from_full_name(name: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|day| day.full_name() == name)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonicalise free-text day names to a three-letter code.
///
/// Returns `""` when the text is not recognised. The function is idempotent.
///
/// # Examples
///
/// ```
/// use routine_extract::schedule::normalize_day;
///
/// assert_eq!(normalize_day("Monday"), "MON");
/// assert_eq!(normalize_day("mon"), "MON");
/// assert_eq!(normalize_day("xyz"), "");
/// ```
pub fn normalize_day(text: &str) -> String {
    classify_day(text)
        .map(|day| day.code().to_string())
        .unwrap_or_default()
}

/// Typed form of [`normalize_day`].
pub fn classify_day(text: &str) -> Option<Weekday> {
    let cleaned = text.trim().to_uppercase();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(day) = Weekday::from_full_name(&cleaned) {
        return Some(day);
    }

    if let Some(day) = Weekday::from_code(&cleaned) {
        return Some(day);
    }

    if let Some(day) = Weekday::ALL
        .into_iter()
        .find(|day| cleaned.starts_with(day.code()) || cleaned.contains(day.code()))
    {
        return Some(day);
    }

    DAY_CODE_WORD
        .captures(&cleaned)
        .and_then(|caps| Weekday::from_code(&caps[1]))
}

/// Search text for a word-bounded day code or full day name.
///
/// Matching is case-insensitive; the first occurrence wins.
pub fn find_day_in_text(text: &str) -> Option<Weekday> {
    let upper = text.to_uppercase();
    DAY_WORD
        .captures(&upper)
        .and_then(|caps| classify_day(&caps[1]))
}

/// Check whether the text is exactly a day code or full day name.
pub fn is_day_token(text: &str) -> bool {
    DAY_TOKEN.is_match(&text.trim().to_uppercase())
}
