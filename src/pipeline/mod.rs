//! Document-level extraction pipeline.
//!
//! Pages are processed one at a time in document order. Each page is
//! reconstructed independently (its header and column boundaries are
//! re-derived, since layouts shift between pages), and the entries of all
//! pages are merged in page order before the cross-page day fill and sort.
//!
//! ```ignore
//! use routine_extract::pipeline::RoutinePipeline;
//!
//! let bytes = std::fs::read("routine.pdf")?;
//! let entries = RoutinePipeline::new().extract_from_bytes(&bytes)?;
//! for entry in &entries {
//!     println!("{} {} {}", entry.day(), entry.time(), entry.value(FieldKey::Module));
//! }
//! ```

pub mod page;

use std::path::Path;

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractors::{LopdfTextLayer, TextLayer};
use crate::schedule::{day_distribution, finalize_entries, ScheduleEntry};

pub use page::{process_page, PageOutcome};

/// Turns a timetable document into ordered schedule entries.
#[derive(Debug, Clone, Default)]
pub struct RoutinePipeline {
    config: ExtractionConfig,
}

impl RoutinePipeline {
    /// Create a pipeline with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a custom configuration.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract from a PDF byte buffer.
    ///
    /// Fails as a whole if the buffer is not a readable PDF or any page's
    /// text layer cannot be decoded.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<Vec<ScheduleEntry>> {
        let layer = LopdfTextLayer::from_bytes(bytes)?;
        self.extract(&layer)
    }

    /// Extract from a PDF file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<ScheduleEntry>> {
        let bytes = std::fs::read(path.as_ref())?;
        self.extract_from_bytes(&bytes)
    }

    /// Extract from any text layer.
    pub fn extract(&self, layer: &dyn TextLayer) -> Result<Vec<ScheduleEntry>> {
        let mut merged = Vec::new();

        for index in 0..layer.page_count() {
            let page = index + 1;
            let fragments = layer.page_fragments(index)?;

            match process_page(fragments, &self.config) {
                PageOutcome::Empty => {
                    log::debug!("Page {}: no text, skipping", page);
                },
                PageOutcome::NoHeader { rows } => {
                    log::warn!(
                        "Page {}: could not find table headers in {} rows, skipping",
                        page,
                        rows
                    );
                },
                PageOutcome::Entries(entries) => {
                    log::debug!("Page {}: extracted {} entries", page, entries.len());
                    merged.extend(entries);
                },
            }
        }

        let finalized = finalize_entries(merged);

        if log::log_enabled!(log::Level::Debug) {
            let distribution = day_distribution(&finalized)
                .iter()
                .map(|(day, count)| format!("{}: {}", day, count))
                .collect::<Vec<_>>()
                .join(", ");
            log::debug!("Day distribution: {}", distribution);
        }
        log::info!("Extracted {} schedule entries", finalized.len());

        Ok(finalized)
    }
}
