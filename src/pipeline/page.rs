//! Per-page table reconstruction.

use crate::config::ExtractionConfig;
use crate::layout::{extract_entries, group_rows, locate_header, ColumnLayout, TextFragment};
use crate::schedule::ScheduleEntry;

/// Outcome of reconstructing one page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The page had no text
    Empty,
    /// No row qualified as a header; the page contributes nothing
    NoHeader {
        /// Number of rows scanned
        rows: usize,
    },
    /// Entries recovered below the header
    Entries(Vec<ScheduleEntry>),
}

impl PageOutcome {
    /// Entries of the page, empty for skipped pages.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        match self {
            PageOutcome::Entries(entries) => entries,
            PageOutcome::Empty | PageOutcome::NoHeader { .. } => Vec::new(),
        }
    }
}

/// Run row grouping, header location, column classification and row
/// extraction over one page's fragments.
pub fn process_page(fragments: Vec<TextFragment>, config: &ExtractionConfig) -> PageOutcome {
    let rows = group_rows(fragments, config.row_tolerance);
    if rows.is_empty() {
        return PageOutcome::Empty;
    }

    let Some(header) = locate_header(&rows, config.min_header_matches) else {
        return PageOutcome::NoHeader { rows: rows.len() };
    };

    let layout = ColumnLayout::from_header(header, config.trailing_margin);
    PageOutcome::Entries(extract_entries(&rows, header, &layout))
}
