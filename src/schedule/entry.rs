//! Schedule entries and the fields they carry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic attribute of a timetable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    /// Day of week
    Day,
    /// Time slot, usually a range
    Time,
    /// Student section or group
    Section,
    /// Duration
    Hours,
    /// Room number
    Room,
    /// Building block
    Block,
    /// Lecturer, instructor or teacher
    Lecturer,
    /// Module code
    ModuleCode,
    /// Module title
    Module,
    /// Lecture, tutorial, practical, ...
    ClassType,
    /// Semester
    Semester,
    /// Course or programme
    Course,
}

impl FieldKey {
    /// Every field in declaration order.
    pub const ALL: [FieldKey; 12] = [
        FieldKey::Day,
        FieldKey::Time,
        FieldKey::Section,
        FieldKey::Hours,
        FieldKey::Room,
        FieldKey::Block,
        FieldKey::Lecturer,
        FieldKey::ModuleCode,
        FieldKey::Module,
        FieldKey::ClassType,
        FieldKey::Semester,
        FieldKey::Course,
    ];

    /// Serialized field name.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::Day => "day",
            FieldKey::Time => "time",
            FieldKey::Section => "section",
            FieldKey::Hours => "hours",
            FieldKey::Room => "room",
            FieldKey::Block => "block",
            FieldKey::Lecturer => "lecturer",
            FieldKey::ModuleCode => "moduleCode",
            FieldKey::Module => "module",
            FieldKey::ClassType => "classType",
            FieldKey::Semester => "semester",
            FieldKey::Course => "course",
        }
    }

    /// Human-readable column title.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Day => "Day",
            FieldKey::Time => "Time",
            FieldKey::Section => "Section",
            FieldKey::Hours => "Hours",
            FieldKey::Room => "Room",
            FieldKey::Block => "Block",
            FieldKey::Lecturer => "Lecturer",
            FieldKey::ModuleCode => "Module Code",
            FieldKey::Module => "Module",
            FieldKey::ClassType => "Class Type",
            FieldKey::Semester => "Semester",
            FieldKey::Course => "Course",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reconstructed timetable row.
///
/// Every field is optional. Empty values are never stored, so a present
/// field always holds non-empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleEntry {
    fields: BTreeMap<FieldKey, String>,
}

impl ScheduleEntry {
    /// Create an entry with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: FieldKey, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a field value.
    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Get a field value, or `""` when absent.
    pub fn value(&self, field: FieldKey) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Check whether a field holds text.
    pub fn has(&self, field: FieldKey) -> bool {
        self.fields.contains_key(&field)
    }

    /// Set a field. An empty value removes the field.
    pub fn set(&mut self, field: FieldKey, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.fields.remove(&field);
        } else {
            self.fields.insert(field, value);
        }
    }

    /// Append text to a field, separated from existing text by a space.
    pub fn append(&mut self, field: FieldKey, text: &str) {
        if text.is_empty() {
            return;
        }
        self.fields
            .entry(field)
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(text);
            })
            .or_insert_with(|| text.to_string());
    }

    /// Apply `f` to every stored value, dropping values that become empty.
    pub fn map_values(&mut self, f: impl Fn(&str) -> String) {
        let mapped: BTreeMap<FieldKey, String> = self
            .fields
            .iter()
            .map(|(field, value)| (*field, f(value)))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        self.fields = mapped;
    }

    /// Day value, or `""`.
    pub fn day(&self) -> &str {
        self.value(FieldKey::Day)
    }

    /// Time value, or `""`.
    pub fn time(&self) -> &str {
        self.value(FieldKey::Time)
    }

    /// Iterate over stored fields in [`FieldKey`] order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// All stored values joined with single spaces.
    pub fn joined_values(&self) -> String {
        self.fields
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check whether the entry holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
