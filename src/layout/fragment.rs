//! Positioned text fragments and the visual rows they form.

/// One piece of positioned text from a page's text layer.
///
/// Coordinates are in PDF user space: the origin sits at the bottom-left
/// corner, so larger `y` values are nearer the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Text content as shown on the page
    pub text: String,
    /// Baseline origin x
    pub x: f32,
    /// Baseline origin y
    pub y: f32,
}

impl TextFragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Fragments sharing one visual line, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Representative y of the row (the y of the fragment that opened it)
    pub y: f32,
    /// Fragments in ascending x order
    pub fragments: Vec<TextFragment>,
}

impl Row {
    /// Create an empty row anchored at `y`.
    pub fn new(y: f32) -> Self {
        Self {
            y,
            fragments: Vec::new(),
        }
    }

    /// Fragment texts joined with single spaces.
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The leftmost fragment, if any.
    pub fn first(&self) -> Option<&TextFragment> {
        self.fragments.first()
    }

    /// Check whether the row holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments in the row.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
