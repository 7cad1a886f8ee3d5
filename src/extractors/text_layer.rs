//! Positioned text layers: the pipeline's only view of a PDF.
//!
//! [`TextLayer`] yields, per page, the shown strings and their origins. The
//! layout code never looks at PDF structure, so any extractor able to place
//! text on a page can stand behind the trait.

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::extractors::text_state::{Matrix, TextState};
use crate::layout::TextFragment;

/// TJ adjustment (thousandths of text space) treated as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Source of positioned text fragments, one list per page.
pub trait TextLayer {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Fragments of the page at `index` (0-based), in content order.
    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>>;
}

/// Text layer whose pages are already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextLayer {
    pages: Vec<Vec<TextFragment>>,
}

impl MemoryTextLayer {
    /// Wrap pre-extracted pages.
    pub fn new(pages: Vec<Vec<TextFragment>>) -> Self {
        Self { pages }
    }

    /// Append a page.
    pub fn push_page(&mut self, fragments: Vec<TextFragment>) {
        self.pages.push(fragments);
    }
}

impl TextLayer for MemoryTextLayer {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>> {
        self.pages.get(index).cloned().ok_or(Error::PageContent {
            page: index + 1,
            reason: format!("document has {} pages", self.pages.len()),
        })
    }
}

/// Text layer read from a PDF's content streams with `lopdf`.
///
/// Each `Tj`, `TJ`, `'` and `"` operation becomes one fragment placed at
/// the text origin in effect when it runs. Glyph advances are not tracked,
/// so consecutive show operations without a repositioning operator share an
/// origin. Strings are decoded as UTF-16BE (with BOM), UTF-8, or Latin-1.
/// Encrypted documents are opened with the empty user password.
pub struct LopdfTextLayer {
    doc: Document,
    pages: Vec<ObjectId>,
}

impl LopdfTextLayer {
    /// Load a document from a byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(bytes).map_err(|e| Error::PdfLoad(e.to_string()))?;

        // Permission-only encryption opens with the empty user password.
        if doc.trailer.get(b"Encrypt").is_ok() {
            doc.decrypt("")
                .map_err(|e| Error::PdfLoad(format!("encrypted document: {}", e)))?;
            log::debug!("Decrypted document with the empty user password");
        }

        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        log::debug!("Loaded PDF with {} pages", pages.len());

        Ok(Self { doc, pages })
    }

    fn decode_page(&self, page: usize, page_id: ObjectId) -> Result<Vec<TextFragment>> {
        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::PageContent {
                page,
                reason: e.to_string(),
            })?;
        let content = Content::decode(&data).map_err(|e| Error::PageContent {
            page,
            reason: e.to_string(),
        })?;

        Ok(interpret_operations(&content.operations))
    }
}

impl TextLayer for LopdfTextLayer {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>> {
        let page_id = *self.pages.get(index).ok_or(Error::PageContent {
            page: index + 1,
            reason: format!("document has {} pages", self.pages.len()),
        })?;
        self.decode_page(index + 1, page_id)
    }
}

/// Walk content operations and emit a fragment per shown string.
pub(crate) fn interpret_operations(operations: &[lopdf::content::Operation]) -> Vec<TextFragment> {
    let mut state = TextState::new();
    let mut fragments = Vec::new();
    let mut in_text = false;

    for op in operations {
        let operands = &op.operands;
        match op.operator.as_str() {
            "q" => state.save(),
            "Q" => state.restore(),
            "cm" => {
                if let Some(m) = matrix_operand(operands) {
                    state.concat(m);
                }
            },
            "BT" => {
                in_text = true;
                state.begin_text();
            },
            "ET" => in_text = false,
            "Tm" => {
                if let Some(m) = matrix_operand(operands) {
                    state.set_text_matrix(m);
                }
            },
            "Td" | "TD" => {
                if let (Some(tx), Some(ty)) = (number_at(operands, 0), number_at(operands, 1)) {
                    if op.operator == "TD" {
                        state.move_text_set_leading(tx, ty);
                    } else {
                        state.move_text(tx, ty);
                    }
                }
            },
            "TL" => {
                if let Some(leading) = number_at(operands, 0) {
                    state.set_leading(leading);
                }
            },
            "T*" => state.next_line(),
            "Tj" if in_text => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    push_fragment(&mut fragments, &state, decode_text(bytes));
                }
            },
            "TJ" if in_text => {
                if let Some(Object::Array(items)) = operands.first() {
                    push_fragment(&mut fragments, &state, decode_tj_array(items));
                }
            },
            "'" if in_text => {
                state.next_line();
                if let Some(Object::String(bytes, _)) = operands.first() {
                    push_fragment(&mut fragments, &state, decode_text(bytes));
                }
            },
            "\"" if in_text => {
                state.next_line();
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    push_fragment(&mut fragments, &state, decode_text(bytes));
                }
            },
            _ => {},
        }
    }

    fragments
}

fn push_fragment(fragments: &mut Vec<TextFragment>, state: &TextState, text: String) {
    if text.trim().is_empty() {
        return;
    }
    let (x, y) = state.origin();
    fragments.push(TextFragment::new(text, x, y));
}

fn matrix_operand(operands: &[Object]) -> Option<Matrix> {
    Some(Matrix::new(
        number_at(operands, 0)?,
        number_at(operands, 1)?,
        number_at(operands, 2)?,
        number_at(operands, 3)?,
        number_at(operands, 4)?,
        number_at(operands, 5)?,
    ))
}

fn number_at(operands: &[Object], index: usize) -> Option<f32> {
    operands.get(index).and_then(get_number)
}

fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

/// Concatenate the strings of a `TJ` array, inserting a space for large
/// negative adjustments.
fn decode_tj_array(items: &[Object]) -> String {
    let mut combined = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => combined.push_str(&decode_text(bytes)),
            other => {
                let gap = get_number(other).map(|n| -n).unwrap_or(0.0);
                if gap > TJ_SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ') {
                    combined.push(' ');
                }
            },
        }
    }
    combined
}

/// Decode a PDF string without font information.
fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}
