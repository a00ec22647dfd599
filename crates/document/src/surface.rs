//! Capability seam between the page layout and the drawing backend.
//!
//! The layout supplies logical strings and target coordinates in
//! millimetres; glyph shaping and right-to-left handling stay on the backend
//! side of this trait.

/// Page dimensions in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize { width: 210.0, height: 297.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchored at `x`, running rightwards.
    Left,
    /// Centered across the page width; `x` is ignored.
    Center,
    /// Anchored at `x`, running leftwards.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextWeight {
    Regular,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub align: TextAlign,
    pub weight: TextWeight,
}

impl TextStyle {
    pub fn regular(size: f32, align: TextAlign) -> Self {
        Self { size, align, weight: TextWeight::Regular }
    }

    pub fn bold(size: f32, align: TextAlign) -> Self {
        Self { size, align, weight: TextWeight::Bold }
    }
}

/// Whether the backend shapes bidirectional text itself or expects strings
/// already in visual glyph order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOrder {
    Logical,
    Visual,
}

/// Drawing surface capability interface. Coordinates are millimetres from
/// the top-left page corner.
pub trait DrawSurface {
    fn page_size(&self) -> PageSize;

    /// How this backend wants its strings ordered. Backends declaring
    /// [`TextOrder::Visual`] reorder internally (see [`visual_order`]); the
    /// layout always passes logical strings either way.
    fn text_order(&self) -> TextOrder {
        TextOrder::Logical
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);

    /// Flow wrapped text inside `width`, returning the cursor y after the
    /// last placed line.
    fn flow_text(&mut self, text: &str, x: f32, y: f32, width: f32, style: TextStyle) -> f32;

    /// Horizontal rule from `x1` to `x2` at height `y`.
    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32);
}

/// Reorder a logical string into visual glyph order for backends without
/// bidi shaping of their own. Naive full reversal, adequate for the short
/// single-direction runs a quote page contains.
pub fn visual_order(text: &str) -> String {
    text.chars().rev().collect()
}

/// Greedy word wrap used by backends to implement [`DrawSurface::flow_text`].
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        lines.push(line);
    }
    lines
}
