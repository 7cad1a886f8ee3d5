//! Error types for timetable extraction.
//!
//! Only conditions that abort a whole document live here. A page without a
//! recognisable header, an unparseable time or an unknown day are handled
//! inside the pipeline and never surface as errors.

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a timetable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The buffer could not be opened as a PDF document
    #[error("Failed to parse PDF file: {0}")]
    PdfLoad(String),

    /// A page's text layer could not be read
    #[error("Failed to read text layer of page {page}: {reason}")]
    PageContent {
        /// 1-based page number
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
