// File: crates/smartstats-render-skia/src/text.rs
// Summary: Text shaping and drawing with Skia textlayout, honouring chart label alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use smartstats_core::geometry::{TextAlign, TextMark, TextRole};

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

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Tabular figures keep tick columns aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw a chart label: anchor is the baseline point, rotation turns around it.
    pub fn draw_mark(&self, canvas: &skia::Canvas, mark: &TextMark, color: skia::Color) {
        let mono = matches!(mark.role, TextRole::Tick | TextRole::Value);
        let bold = matches!(mark.role, TextRole::Title | TextRole::Header);
        let p = self.layout(&mark.text, mark.size, color, mono, bold);
        let w = p.longest_line();
        let dx = match mark.align {
            TextAlign::Start => 0.0,
            TextAlign::Middle => -w / 2.0,
            TextAlign::End => -w,
        };
        canvas.save();
        canvas.translate((mark.anchor.x, mark.anchor.y));
        if mark.rotation != 0.0 {
            canvas.rotate(mark.rotation, None);
        }
        // Paragraph draws from top-left; lift by the approximate ascent to sit on the baseline.
        p.paint(canvas, (dx, -mark.size * 0.8));
        canvas.restore();
    }
}
