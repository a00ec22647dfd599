//! In-memory surface that records draw operations. Used by tests to assert
//! on page content without a real rendering backend.

use crate::surface::{wrap_text, DrawSurface, PageSize, TextStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text { text: String, x: f32, y: f32, style: TextStyle },
    Rule { x1: f32, x2: f32, y: f32 },
}

#[derive(Debug)]
pub struct RecordingSurface {
    page: PageSize,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { page: PageSize::A4, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_owned(), x, y, style });
    }

    fn flow_text(&mut self, text: &str, x: f32, y: f32, width: f32, style: TextStyle) -> f32 {
        // Rough glyph budget: ~0.5 * size points per character, 0.3528 mm/pt.
        let char_width_mm = style.size * 0.5 * 0.3528;
        let max_chars = (width / char_width_mm).floor() as usize;
        let line_height = style.size * 0.45;

        let mut cursor = y;
        for line in wrap_text(text, max_chars) {
            self.place_text(&line, x, cursor, style);
            cursor += line_height;
        }
        cursor
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.ops.push(DrawOp::Rule { x1, x2, y });
    }
}
