//! Detection of the row holding the table's column titles.

use crate::layout::fragment::Row;

/// Keywords whose presence marks a row as a likely header.
pub const HEADER_KEYWORDS: [&str; 12] = [
    "day", "time", "section", "hours", "room", "block", "lecturer", "module", "class", "type",
    "semester", "course",
];

/// Count how many header keywords occur in the row's lower-cased text.
///
/// Each keyword counts at most once regardless of repeats.
pub fn keyword_matches(row: &Row) -> usize {
    let text = row.text().to_lowercase();
    HEADER_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// Find the first row, scanning top-down, with more than `min_matches`
/// keyword matches.
///
/// Later rows are never preferred even if they score higher. Returns `None`
/// when no row qualifies; callers skip such pages.
pub fn locate_header(rows: &[Row], min_matches: usize) -> Option<&Row> {
    rows.iter().find(|row| keyword_matches(row) > min_matches)
}
