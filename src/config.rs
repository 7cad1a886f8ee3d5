//! Configuration for timetable extraction.

/// Default vertical tolerance for grouping fragments into one row.
pub const DEFAULT_ROW_TOLERANCE: f32 = 5.0;

/// Default keyword count a header row must exceed.
pub const DEFAULT_MIN_HEADER_MATCHES: usize = 4;

/// Default distance of the trailing column boundary past the last header.
pub const DEFAULT_TRAILING_MARGIN: f32 = 100.0;

/// Layout-recovery configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Fragments whose y differs from a row's representative y by less than
    /// this join that row.
    pub row_tolerance: f32,

    /// A row is a header only if strictly more keywords than this match.
    pub min_header_matches: usize,

    /// Offset of the final column boundary past the last header x.
    pub trailing_margin: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            row_tolerance: DEFAULT_ROW_TOLERANCE,
            min_header_matches: DEFAULT_MIN_HEADER_MATCHES,
            trailing_margin: DEFAULT_TRAILING_MARGIN,
        }
    }

    /// Set the row grouping tolerance.
    pub fn with_row_tolerance(mut self, tolerance: f32) -> Self {
        self.row_tolerance = tolerance;
        self
    }

    /// Set the header keyword threshold.
    pub fn with_min_header_matches(mut self, matches: usize) -> Self {
        self.min_header_matches = matches;
        self
    }

    /// Set the trailing boundary margin.
    pub fn with_trailing_margin(mut self, margin: f32) -> Self {
        self.trailing_margin = margin;
        self
    }
}
