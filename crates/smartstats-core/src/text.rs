// File: crates/smartstats-core/src/text.rs
// Summary: Deterministic text metrics used by the geometry engine for label fitting.
//
// Geometry must not depend on the surface that draws it, so label widths come from
// a fixed per-glyph advance rather than from a font backend.

/// Average glyph advance as a fraction of the font size.
pub const AVG_ADVANCE_EM: f32 = 0.56;

const ELLIPSIS: char = '\u{2026}';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub size: f32,
}

impl TextMetrics {
    pub fn new(size: f32) -> Self {
        Self { size: size.max(1.0) }
    }

    pub fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * AVG_ADVANCE_EM
    }

    /// Cut `text` so it fits `max_width`, ending in an ellipsis when shortened.
    pub fn truncate_to_width(&self, text: &str, max_width: f32) -> String {
        if self.measure(text) <= max_width {
            return text.to_string();
        }
        let advance = self.size * AVG_ADVANCE_EM;
        let keep = ((max_width / advance).floor() as usize).saturating_sub(1);
        if keep == 0 {
            return String::new();
        }
        let mut out: String = text.chars().take(keep).collect();
        out.push(ELLIPSIS);
        out
    }
}

/// Compact numeric label: whole numbers without decimals, others with two.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
