//! Mapping of header fragments to schedule fields and column boundaries.
//!
//! Several field names share substrings ("class type" vs "type", "module
//! code" vs "module"), so classification is an ordered rule list where the
//! first matching rule wins. The order of [`HEADER_RULES`] is significant.

use std::cmp::Ordering;

use crate::layout::fragment::Row;
use crate::schedule::FieldKey;

/// A predicate over lower-cased, trimmed header text and the field it selects.
#[derive(Clone, Copy)]
pub struct HeaderRule {
    /// Field assigned when the predicate holds
    pub field: FieldKey,
    /// Predicate over the normalised header text
    pub matches: fn(&str) -> bool,
}

fn is_day(t: &str) -> bool {
    t.contains("day") && !t.contains("today") && !t.contains("yesterday")
}

fn is_time(t: &str) -> bool {
    t.contains("time")
}

fn is_section(t: &str) -> bool {
    t.contains("section")
}

fn is_hours(t: &str) -> bool {
    t.contains("hour")
}

fn is_room(t: &str) -> bool {
    t.contains("room") && !t.contains("classroom")
}

fn is_block(t: &str) -> bool {
    t.contains("block")
}

fn is_lecturer(t: &str) -> bool {
    t.contains("lecturer") || t.contains("instructor") || t.contains("teacher")
}

fn is_module_code(t: &str) -> bool {
    t.contains("code") && (t.contains("module") || t.contains("course"))
}

fn is_module(t: &str) -> bool {
    t.contains("title") || (t.contains("module") && !t.contains("code"))
}

fn is_class_type(t: &str) -> bool {
    (t.contains("class") && t.contains("type")) || (t.contains("type") && !t.contains("module"))
}

fn is_semester(t: &str) -> bool {
    t.contains("semester") || t.contains("sem")
}

fn is_course(t: &str) -> bool {
    t.contains("course") && !t.contains("code")
}

/// Header rules in priority order.
pub const HEADER_RULES: [HeaderRule; 12] = [
    HeaderRule { field: FieldKey::Day, matches: is_day },
    HeaderRule { field: FieldKey::Time, matches: is_time },
    HeaderRule { field: FieldKey::Section, matches: is_section },
    HeaderRule { field: FieldKey::Hours, matches: is_hours },
    HeaderRule { field: FieldKey::Room, matches: is_room },
    HeaderRule { field: FieldKey::Block, matches: is_block },
    HeaderRule { field: FieldKey::Lecturer, matches: is_lecturer },
    HeaderRule { field: FieldKey::ModuleCode, matches: is_module_code },
    HeaderRule { field: FieldKey::Module, matches: is_module },
    HeaderRule { field: FieldKey::ClassType, matches: is_class_type },
    HeaderRule { field: FieldKey::Semester, matches: is_semester },
    HeaderRule { field: FieldKey::Course, matches: is_course },
];

/// Classify one header cell's text.
///
/// Returns `None` for text no rule recognises; such a column still takes
/// part in boundary computation.
///
/// # Examples
///
/// ```
/// use routine_extract::layout::classify_header;
/// use routine_extract::schedule::FieldKey;
///
/// assert_eq!(classify_header("Class Type"), Some(FieldKey::ClassType));
/// assert_eq!(classify_header("Module Code"), Some(FieldKey::ModuleCode));
/// assert_eq!(classify_header("Remarks"), None);
/// ```
pub fn classify_header(text: &str) -> Option<FieldKey> {
    let normalized = text.trim().to_lowercase();
    HEADER_RULES
        .iter()
        .find(|rule| (rule.matches)(&normalized))
        .map(|rule| rule.field)
}

/// One column of the identified header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderColumn {
    /// Field the column feeds, if recognised
    pub field: Option<FieldKey>,
    /// X position of the header text
    pub x: f32,
}

/// Left-to-right columns and the x thresholds separating them.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Columns in ascending x order
    pub columns: Vec<HeaderColumn>,
    /// Upper x bound of each column (same length as `columns`)
    pub boundaries: Vec<f32>,
}

impl ColumnLayout {
    /// Derive the column layout from the header row.
    ///
    /// Boundaries are midpoints between adjacent header positions, plus a
    /// trailing boundary `trailing_margin` past the last header.
    pub fn from_header(header: &Row, trailing_margin: f32) -> Self {
        let mut columns: Vec<HeaderColumn> = header
            .fragments
            .iter()
            .map(|fragment| HeaderColumn {
                field: classify_header(&fragment.text),
                x: fragment.x,
            })
            .collect();
        columns.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let mut boundaries: Vec<f32> = columns
            .windows(2)
            .map(|pair| (pair[0].x + pair[1].x) / 2.0)
            .collect();
        if let Some(last) = columns.last() {
            boundaries.push(last.x + trailing_margin);
        }

        Self {
            columns,
            boundaries,
        }
    }

    /// Index of the column containing `x`.
    ///
    /// This is the first boundary `x` does not exceed. Text beyond the
    /// trailing boundary belongs to no column.
    pub fn column_for(&self, x: f32) -> Option<usize> {
        self.boundaries.iter().position(|&boundary| x <= boundary)
    }

    /// Field mapped to the column at `index`.
    pub fn field_at(&self, index: usize) -> Option<FieldKey> {
        self.columns.get(index).and_then(|column| column.field)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the layout has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
