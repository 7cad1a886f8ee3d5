//! Integration tests for day normalisation, time parsing and the
//! cross-page fill and sort passes.

use proptest::prelude::*;
use routine_extract::schedule::{
    finalize_entries, normalize_day, parse_time_value, sort_by_day_and_time, FieldKey,
    ScheduleEntry, ScheduleFilter, Weekday,
};

fn entry(day: &str, time: &str) -> ScheduleEntry {
    ScheduleEntry::new()
        .with(FieldKey::Day, day)
        .with(FieldKey::Time, time)
}

fn day_rank(day: &str) -> usize {
    Weekday::ALL
        .iter()
        .position(|d| d.code() == day)
        .unwrap_or(Weekday::ALL.len())
}

// =============================================================================
// DAY NORMALISATION
// =============================================================================

#[test]
fn test_normalize_day_examples() {
    assert_eq!(normalize_day("Monday"), "MON");
    assert_eq!(normalize_day("mon"), "MON");
    assert_eq!(normalize_day("xyz"), "");
}

proptest! {
    #[test]
    fn prop_normalize_day_is_idempotent(text in ".{0,24}") {
        let once = normalize_day(&text);
        prop_assert_eq!(normalize_day(&once), once);
    }

    #[test]
    fn prop_normalize_day_yields_code_or_empty(text in "[A-Za-z ]{0,16}") {
        let day = normalize_day(&text);
        prop_assert!(day.is_empty() || Weekday::from_code(&day).is_some());
    }
}

// =============================================================================
// TIME PARSING
// =============================================================================

#[test]
fn test_parse_time_value_examples() {
    assert_eq!(parse_time_value("06:30 - 08:00"), Some(390));
    assert_eq!(parse_time_value("6.30"), Some(390));
    assert_eq!(parse_time_value("25:00"), None);
}

// =============================================================================
// FILL AND SORT
// =============================================================================

#[test]
fn test_fill_example() {
    let entries = vec![entry("", "9:00"), entry("MON", "10:00"), entry("", "11:00")];
    let days: Vec<String> = finalize_entries(entries)
        .iter()
        .map(|e| e.day().to_string())
        .collect();
    assert_eq!(days, vec!["MON", "MON", "MON"]);
}

#[test]
fn test_full_week_is_filled_and_ordered() {
    // Document order: Monday block, then Sunday block, each naming the day once.
    let entries = vec![
        entry("Monday", "11:30 - 13:00"),
        entry("", "08:00 - 09:30"),
        entry("SUNDAY", "10:00 - 11:30"),
        entry("", "07:00 - 08:30"),
        entry("", "TBA"),
    ];
    let finalized = finalize_entries(entries);
    let pairs: Vec<(&str, &str)> = finalized.iter().map(|e| (e.day(), e.time())).collect();
    assert_eq!(
        pairs,
        vec![
            ("SUN", "07:00 - 08:30"),
            ("SUN", "10:00 - 11:30"),
            ("SUN", "TBA"),
            ("MON", "08:00 - 09:30"),
            ("MON", "11:30 - 13:00"),
        ]
    );
}

#[test]
fn test_day_recovered_from_other_fields_before_fill() {
    let entries = vec![
        entry("", "9:00").with(FieldKey::Module, "WED elective"),
        entry("", "10:00"),
    ];
    let days: Vec<String> = finalize_entries(entries)
        .iter()
        .map(|e| e.day().to_string())
        .collect();
    assert_eq!(days, vec!["WED", "WED"]);
}

#[test]
fn test_filter_after_finalize() {
    let entries = finalize_entries(vec![
        entry("MON", "9:00").with(FieldKey::Block, "A").with(FieldKey::ClassType, "Lecture"),
        entry("", "10:00").with(FieldKey::Block, "B").with(FieldKey::ClassType, "Tutorial"),
        entry("TUE", "9:00").with(FieldKey::Block, "A").with(FieldKey::ClassType, "Practical"),
    ]);

    let monday = ScheduleFilter::new().with_day("MON").apply(&entries);
    assert_eq!(monday.len(), 2);

    let block_a_labs = ScheduleFilter::new()
        .with_block("a")
        .with_class_type("practical")
        .apply(&entries);
    assert_eq!(block_a_labs.len(), 1);
    assert_eq!(block_a_labs[0].day(), "TUE");
}

fn arb_entry() -> impl Strategy<Value = ScheduleEntry> {
    let day = prop::sample::select(vec!["", "SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"]);
    let time = prop_oneof![
        (0u32..30, 0u32..70).prop_map(|(h, m)| format!("{}:{:02}", h, m)),
        Just("TBA".to_string()),
    ];
    (day, time).prop_map(|(day, time)| entry(day, &time))
}

proptest! {
    #[test]
    fn prop_sorted_by_week_then_time(entries in prop::collection::vec(arb_entry(), 0..40)) {
        let sorted = sort_by_day_and_time(entries.clone());
        prop_assert_eq!(sorted.len(), entries.len());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (rank_a, rank_b) = (day_rank(a.day()), day_rank(b.day()));
            prop_assert!(rank_a <= rank_b);

            if rank_a == rank_b {
                match (parse_time_value(a.time()), parse_time_value(b.time())) {
                    (Some(ta), Some(tb)) => prop_assert!(ta <= tb),
                    (None, Some(_)) => prop_assert!(false, "unparseable time before a parsed one"),
                    _ => {},
                }
            }
        }
    }
}
