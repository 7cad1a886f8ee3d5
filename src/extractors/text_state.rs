//! Text positioning state for content-stream interpretation.
//!
//! Only the parts of the graphics and text state that move the text origin
//! are tracked: the CTM with its `q`/`Q` stack, the text and line matrices,
//! and the leading used by `T*`, `'` and `"`.

/// 2D affine transformation matrix `[a b c d e f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Horizontal scaling component
    pub a: f32,
    /// Rotation/skew component
    pub b: f32,
    /// Rotation/skew component
    pub c: f32,
    /// Vertical scaling component
    pub d: f32,
    /// Horizontal translation
    pub e: f32,
    /// Vertical translation
    pub f: f32,
}

impl Matrix {
    /// Identity matrix.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Matrix from its six components.
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Translation matrix.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Multiply: the result applies `self` first, then `other`.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Transform a point.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tracks where the next shown string starts.
#[derive(Debug, Clone)]
pub struct TextState {
    ctm: Matrix,
    saved: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    leading: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextState {
    /// Fresh state at the start of a page.
    pub fn new() -> Self {
        Self {
            ctm: Matrix::identity(),
            saved: Vec::new(),
            text_matrix: Matrix::identity(),
            line_matrix: Matrix::identity(),
            leading: 0.0,
        }
    }

    /// `q`
    pub fn save(&mut self) {
        self.saved.push(self.ctm);
    }

    /// `Q`. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(ctm) = self.saved.pop() {
            self.ctm = ctm;
        }
    }

    /// `cm`
    pub fn concat(&mut self, m: Matrix) {
        self.ctm = m.multiply(&self.ctm);
    }

    /// `BT`
    pub fn begin_text(&mut self) {
        self.text_matrix = Matrix::identity();
        self.line_matrix = Matrix::identity();
    }

    /// `Tm`
    pub fn set_text_matrix(&mut self, m: Matrix) {
        self.text_matrix = m;
        self.line_matrix = m;
    }

    /// `Td`
    pub fn move_text(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translation(tx, ty).multiply(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    /// `TD`: move and set the leading to `-ty`.
    pub fn move_text_set_leading(&mut self, tx: f32, ty: f32) {
        self.leading = -ty;
        self.move_text(tx, ty);
    }

    /// `TL`
    pub fn set_leading(&mut self, leading: f32) {
        self.leading = leading;
    }

    /// `T*`
    pub fn next_line(&mut self) {
        self.move_text(0.0, -self.leading);
    }

    /// Origin of the next string in user space.
    pub fn origin(&self) -> (f32, f32) {
        self.text_matrix.multiply(&self.ctm).transform_point(0.0, 0.0)
    }
}
