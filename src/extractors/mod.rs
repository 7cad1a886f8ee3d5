//! Text extraction from PDF documents.
//!
//! Provides the positioned text layer that feeds layout analysis.

pub mod text_layer;
pub mod text_state;

pub use text_layer::{LopdfTextLayer, MemoryTextLayer, TextLayer};
pub use text_state::{Matrix, TextState};
