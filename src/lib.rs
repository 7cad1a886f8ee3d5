// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::unnecessary_map_or)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Routine Extract
//!
//! Reconstructs university timetables from PDF text layers.
//!
//! A timetable PDF rarely carries a usable table structure: it is a stream
//! of strings placed at (x, y) positions. This crate recovers the table
//! with a best-effort layout heuristic and returns one [`ScheduleEntry`]
//! per class, ordered by day of week and start time.
//!
//! ## Pipeline
//!
//! - **Text layer**: positioned fragments per page ([`extractors`])
//! - **Row grouping**: fragments clustered by y, ordered by x
//! - **Header location**: first row with enough column keywords
//! - **Column classification**: ranked substring rules, midpoint boundaries
//! - **Row extraction**: fragments assigned to columns, day fallbacks
//! - **Day fill and sort**: cross-page day propagation, week/time order
//!
//! Pages without a recognisable header are skipped with a warning.
//!
//! ## Quick Start
//!
//! ```ignore
//! use routine_extract::{RoutinePipeline, ScheduleFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("routine.pdf")?;
//! let entries = RoutinePipeline::new().extract_from_bytes(&bytes)?;
//!
//! let monday_labs = ScheduleFilter::new().with_day("MON").with_class_type("Practical");
//! for entry in monday_labs.apply(&entries) {
//!     println!("{} {}", entry.time(), entry.joined_values());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

/// Extraction configuration
pub mod config;

// Text extraction
pub mod extractors;

// Layout analysis
pub mod layout;

// Schedule model and cross-page passes
pub mod schedule;

// Document pipeline
pub mod pipeline;

// Re-exports
pub use config::ExtractionConfig;
pub use error::{Error, Result};
pub use extractors::{LopdfTextLayer, MemoryTextLayer, TextLayer};
pub use layout::TextFragment;
pub use pipeline::RoutinePipeline;
pub use schedule::{normalize_day, parse_time_value, FieldKey, ScheduleEntry, ScheduleFilter};
