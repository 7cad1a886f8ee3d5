//! Filtering of a finished schedule by day, block and class type.

use crate::schedule::entry::{FieldKey, ScheduleEntry};

/// Choice that disables a filter criterion.
pub const ALL: &str = "ALL";

/// Criteria for narrowing a schedule. `None` accepts every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    /// Day code, compared case-insensitively
    pub day: Option<String>,
    /// Block letter, compared case-insensitively
    pub block: Option<String>,
    /// Class type, compared case-insensitively
    pub class_type: Option<String>,
}

impl ScheduleFilter {
    /// Create a filter that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a user choice to a criterion: `"ALL"` or blank means no filter.
    pub fn parse_choice(choice: &str) -> Option<String> {
        let choice = choice.trim();
        if choice.is_empty() || choice.eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(choice.to_string())
        }
    }

    /// Restrict to one day.
    pub fn with_day(mut self, day: &str) -> Self {
        self.day = Self::parse_choice(day);
        self
    }

    /// Restrict to one block.
    pub fn with_block(mut self, block: &str) -> Self {
        self.block = Self::parse_choice(block);
        self
    }

    /// Restrict to one class type.
    pub fn with_class_type(mut self, class_type: &str) -> Self {
        self.class_type = Self::parse_choice(class_type);
        self
    }

    /// Check whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.block.is_none() && self.class_type.is_none()
    }

    /// Check an entry against every set criterion.
    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        let day_ok = self
            .day
            .as_ref()
            .map_or(true, |day| entry.day().to_uppercase() == day.to_uppercase());
        let block_ok = self.block.as_ref().map_or(true, |block| {
            entry.value(FieldKey::Block).to_uppercase() == block.to_uppercase()
        });
        let class_type_ok = self.class_type.as_ref().map_or(true, |class_type| {
            entry.value(FieldKey::ClassType).to_lowercase() == class_type.to_lowercase()
        });

        day_ok && block_ok && class_type_ok
    }

    /// Keep matching entries, preserving order.
    pub fn apply<'a>(&self, entries: &'a [ScheduleEntry]) -> Vec<&'a ScheduleEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}
