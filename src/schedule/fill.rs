//! Cross-page passes: day recovery, day fill and final ordering.
//!
//! Timetables often print the day once per block of rows. After all pages
//! are merged, the missing days are carried forward from the previous
//! entry, then backward into any leading gap, and the list is ordered by
//! day of week and start time.

use indexmap::IndexMap;

use crate::schedule::day::{find_day_in_text, normalize_day, Weekday};
use crate::schedule::entry::{FieldKey, ScheduleEntry};
use crate::schedule::time::parse_time_value;

/// Group label for entries whose day could not be determined.
pub const UNKNOWN_DAY: &str = "Unknown";

/// Run the cross-page passes over the merged entries of a document.
///
/// Entries without a time take no part in the fill; they keep their own
/// day and are placed after the timed entries of that day. An entry left
/// with neither day nor time is dropped.
///
/// # Examples
///
/// ```
/// use routine_extract::schedule::{finalize_entries, FieldKey, ScheduleEntry};
///
/// let entries = vec![
///     ScheduleEntry::new().with(FieldKey::Time, "9:00"),
///     ScheduleEntry::new().with(FieldKey::Day, "MON").with(FieldKey::Time, "10:00"),
///     ScheduleEntry::new().with(FieldKey::Time, "11:00"),
/// ];
///
/// let days: Vec<String> = finalize_entries(entries)
///     .iter()
///     .map(|e| e.day().to_string())
///     .collect();
/// assert_eq!(days, vec!["MON", "MON", "MON"]);
/// ```
pub fn finalize_entries(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    let (timed, untimed): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .map(recover_day)
        .partition(|entry| entry.has(FieldKey::Time));

    let filled = fill_backward(fill_forward(timed));
    let untimed = untimed.into_iter().filter(|entry| entry.has(FieldKey::Day));

    sort_by_day_and_time(filled.into_iter().chain(untimed).collect())
}

/// Normalise the entry's day, or search its values for one.
pub fn recover_day(mut entry: ScheduleEntry) -> ScheduleEntry {
    let day = normalize_day(entry.day());
    entry.set(FieldKey::Day, day);

    if !entry.has(FieldKey::Day) {
        if let Some(day) = find_day_in_text(&entry.joined_values()) {
            entry.set(FieldKey::Day, day.code());
        }
    }
    entry
}

/// Carry the most recent day forward into entries that lack one.
pub fn fill_forward(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    let (_, filled) = entries.into_iter().fold(
        (String::new(), Vec::new()),
        |(mut last_day, mut out): (String, Vec<ScheduleEntry>), mut entry| {
            let current = normalize_day(entry.day());
            if !current.is_empty() {
                last_day = current;
            }
            if !last_day.is_empty() {
                entry.set(FieldKey::Day, last_day.clone());
            }
            out.push(entry);
            (last_day, out)
        },
    );
    filled
}

/// Carry the nearest following day backward into entries that lack one.
pub fn fill_backward(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    let (_, mut filled) = entries.into_iter().rev().fold(
        (String::new(), Vec::new()),
        |(mut last_day, mut out): (String, Vec<ScheduleEntry>), mut entry| {
            let current = normalize_day(entry.day());
            if !current.is_empty() {
                last_day = current;
            } else if !last_day.is_empty() {
                entry.set(FieldKey::Day, last_day.clone());
            }
            out.push(entry);
            (last_day, out)
        },
    );
    filled.reverse();
    filled
}

/// Group label of an entry: its canonical day code or [`UNKNOWN_DAY`].
pub fn day_group(entry: &ScheduleEntry) -> String {
    let day = normalize_day(entry.day());
    if day.is_empty() {
        UNKNOWN_DAY.to_string()
    } else {
        day
    }
}

/// Order entries SUN..SAT, then other groups in discovery order.
///
/// Within a group entries are stable-sorted by parsed start time; entries
/// whose time is missing or unparseable come last.
pub fn sort_by_day_and_time(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    let mut groups: IndexMap<String, Vec<ScheduleEntry>> = IndexMap::new();
    for entry in entries {
        groups.entry(day_group(&entry)).or_default().push(entry);
    }

    for group in groups.values_mut() {
        group.sort_by_key(time_sort_key);
    }

    let mut ordered = Vec::new();
    for day in Weekday::ALL {
        if let Some(group) = groups.shift_remove(day.code()) {
            ordered.extend(group);
        }
    }
    ordered.extend(groups.into_values().flatten());
    ordered
}

fn time_sort_key(entry: &ScheduleEntry) -> (bool, u32) {
    match parse_time_value(entry.time()) {
        Some(minutes) => (false, minutes),
        None => (true, 0),
    }
}

/// Per-day entry counts in output order.
pub fn day_distribution(entries: &[ScheduleEntry]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for entry in entries {
        *counts.entry(day_group(entry)).or_default() += 1;
    }
    counts.into_iter().collect()
}
