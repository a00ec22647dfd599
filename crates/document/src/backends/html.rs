//! Print-ready HTML backend: absolutely positioned text in millimetre
//! coordinates, sized to one physical page. The output either goes to the
//! browser's print dialog or through an external HTML-to-PDF converter.
//!
//! HTML shapes bidirectional text natively, so this backend consumes logical
//! strings as-is.

use crate::surface::{wrap_text, DrawSurface, PageSize, TextAlign, TextStyle, TextWeight};

pub struct HtmlSurface {
    page: PageSize,
    body: String,
}

impl HtmlSurface {
    pub fn new(page: PageSize) -> Self {
        Self { page, body: String::new() }
    }

    /// Finish the page and return the complete HTML document.
    pub fn finish(self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html dir=\"rtl\" lang=\"he\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<style>\n",
                "@page {{ size: A4; margin: 0; }}\n",
                "body {{ margin: 0; font-family: \"David Libre\", \"Noto Sans Hebrew\", sans-serif; }}\n",
                ".page {{ position: relative; width: {width}mm; height: {height}mm; overflow: hidden; }}\n",
                ".page div {{ position: absolute; white-space: pre; }}\n",
                "hr {{ position: absolute; border: none; border-top: 0.5mm solid #000; margin: 0; }}\n",
                "</style>\n",
                "</head>\n",
                "<body>\n",
                "<div class=\"page\">\n",
                "{body}",
                "</div>\n",
                "</body>\n",
                "</html>\n",
            ),
            width = self.page.width,
            height = self.page.height,
            body = self.body,
        )
    }

    fn push_line(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        let weight = match style.weight {
            TextWeight::Regular => "normal",
            TextWeight::Bold => "bold",
        };
        let anchor = match style.align {
            TextAlign::Left => format!("left:{x}mm;text-align:left;"),
            TextAlign::Center => {
                format!("left:0;width:{}mm;text-align:center;", self.page.width)
            }
            TextAlign::Right => {
                format!("right:{}mm;text-align:right;", self.page.width - x)
            }
        };
        self.body.push_str(&format!(
            "<div style=\"top:{y}mm;{anchor}font-size:{size}pt;font-weight:{weight};\">{text}</div>\n",
            size = style.size,
            text = escape(text),
        ));
    }
}

impl DrawSurface for HtmlSurface {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn place_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.push_line(text, x, y, style);
    }

    fn flow_text(&mut self, text: &str, x: f32, y: f32, width: f32, style: TextStyle) -> f32 {
        let char_width_mm = style.size * 0.5 * 0.3528;
        let max_chars = (width / char_width_mm).floor() as usize;
        let line_height = style.size * 0.45;

        let mut cursor = y;
        for line in wrap_text(text, max_chars) {
            self.push_line(&line, x, cursor, style);
            cursor += line_height;
        }
        cursor
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32) {
        self.body.push_str(&format!(
            "<hr style=\"top:{y}mm;left:{x1}mm;width:{width}mm;\">\n",
            width = x2 - x1,
        ));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use crate::surface::{DrawSurface, PageSize, TextAlign, TextStyle};

    use super::HtmlSurface;

    #[test]
    fn produces_one_rtl_page_with_positioned_text() {
        let mut surface = HtmlSurface::new(PageSize::A4);
        surface.place_text("נגר על הבוקר", 200.0, 20.0, TextStyle::bold(26.0, TextAlign::Right));
        surface.draw_rule(14.0, 200.0, 45.0);
        let html = surface.finish();

        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("width: 210mm"));
        assert!(html.contains("נגר על הבוקר"));
        assert!(html.contains("right:10mm"));
        assert!(html.contains("font-weight:bold"));
        assert!(html.contains("width:186mm"));
    }

    #[test]
    fn markup_in_strings_is_escaped() {
        let mut surface = HtmlSurface::new(PageSize::A4);
        surface.place_text("<b>  & sons", 14.0, 20.0, TextStyle::regular(12.0, TextAlign::Left));
        let html = surface.finish();

        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&amp; sons"));
        assert!(!html.contains("<b>"));
    }
}
