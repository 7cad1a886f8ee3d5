//! Schedule entries and the passes that finish them.
//!
//! - [`entry`]: `FieldKey` and `ScheduleEntry`
//! - [`day`]: day-name canonicalisation
//! - [`time`]: start-time parsing
//! - [`fill`]: cross-page day fill and week/time ordering
//! - [`filter`]: day/block/class-type filtering

pub mod day;
pub mod entry;
pub mod fill;
pub mod filter;
pub mod time;

pub use day::{classify_day, find_day_in_text, is_day_token, normalize_day, Weekday};
pub use entry::{FieldKey, ScheduleEntry};
pub use fill::{
    day_distribution, fill_backward, fill_forward, finalize_entries, recover_day,
    sort_by_day_and_time, UNKNOWN_DAY,
};
pub use filter::ScheduleFilter;
pub use time::parse_time_value;
