//! Layout analysis for timetable pages.
//!
//! This module recovers a table from positioned text:
//! - Row grouping on the y axis
//! - Header row detection by keyword count
//! - Header classification and column boundaries
//! - Assignment of fragments to columns and entry extraction

pub mod column_classifier;
pub mod fragment;
pub mod header_locator;
pub mod row_extractor;
pub mod row_grouper;

// Re-export main types
pub use column_classifier::{classify_header, ColumnLayout, HeaderColumn, HeaderRule, HEADER_RULES};
pub use fragment::{Row, TextFragment};
pub use header_locator::{keyword_matches, locate_header, HEADER_KEYWORDS};
pub use row_extractor::extract_entries;
pub use row_grouper::group_rows;
