//! Extraction of schedule entries from the rows below a header.

use crate::layout::column_classifier::ColumnLayout;
use crate::layout::fragment::Row;
use crate::schedule::{find_day_in_text, is_day_token, normalize_day, FieldKey, ScheduleEntry};

/// Extract one entry per data row printed below `header`.
///
/// A row is below the header when its y is strictly smaller (PDF y grows
/// upwards). Only rows that end up with a day or a time are returned.
pub fn extract_entries(rows: &[Row], header: &Row, layout: &ColumnLayout) -> Vec<ScheduleEntry> {
    rows.iter()
        .filter(|row| row.y < header.y && !row.is_empty())
        .filter_map(|row| extract_row(row, layout))
        .collect()
}

/// Build the entry for a single data row.
fn extract_row(row: &Row, layout: &ColumnLayout) -> Option<ScheduleEntry> {
    let mut entry = ScheduleEntry::new();

    for fragment in &row.fragments {
        let Some(column) = layout.column_for(fragment.x) else {
            continue;
        };
        let text = fragment.text.trim();

        match layout.field_at(column) {
            Some(field) => entry.append(field, text),
            // Headerless day column on the far left.
            None if column == 0 && is_day_token(text) => {
                entry.set(FieldKey::Day, normalize_day(text));
            },
            None => {},
        }
    }

    entry.map_values(collapse_whitespace);
    resolve_day(&mut entry, row);

    if entry.has(FieldKey::Day) || entry.has(FieldKey::Time) {
        Some(entry)
    } else {
        None
    }
}

/// Canonicalise the entry's day, falling back to the row's first fragment
/// and then to any day word among the collected values.
fn resolve_day(entry: &mut ScheduleEntry, row: &Row) {
    let day = normalize_day(entry.day());
    if !day.is_empty() {
        entry.set(FieldKey::Day, day);
        return;
    }

    let from_first = row
        .first()
        .map(|fragment| normalize_day(&fragment.text))
        .unwrap_or_default();
    if !from_first.is_empty() {
        entry.set(FieldKey::Day, from_first);
        return;
    }

    let found = find_day_in_text(&entry.joined_values())
        .map(|day| day.code().to_string())
        .unwrap_or_default();
    entry.set(FieldKey::Day, found);
}

/// Trim and collapse internal runs of whitespace to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
