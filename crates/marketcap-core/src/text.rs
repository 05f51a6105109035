// File: crates/marketcap-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchors text by center/left/right and baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::label::{Baseline, TextLine};

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` so that (`x`, `y`) lands on the requested anchor and baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        baseline: Baseline,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        let h = p.height();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        let top = match baseline {
            Baseline::Top => y,
            Baseline::Middle => y - h * 0.5,
            Baseline::Bottom => y - h,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw a bar label line centered on its anchor point.
    pub fn draw_line(&self, canvas: &skia::Canvas, line: &TextLine, color: skia::Color) {
        self.draw(canvas, &line.text, line.x, line.y, Anchor::Middle, line.baseline, line.font_size, color, line.bold);
    }

    /// Draw text rotated by -90 degrees, centered on (`x`, `y`).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, 0.0, 0.0, Anchor::Middle, Baseline::Middle, size, color, false);
        canvas.restore();
    }
}
