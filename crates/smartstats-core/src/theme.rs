// File: crates/smartstats-core/src/theme.rs
// Summary: Light/Dark theming for chart surfaces, expressed as plain RGBA so every surface shares it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Convert HSL (degrees, 0..1, 0..1) to an opaque colour.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::from_argb(255, to8(r), to8(g), to8(b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub bar_fill: Rgba,
    pub line_stroke: Rgba,
    pub point_fill: Rgba,
    pub slice_label: Rgba,
    pub table_header: Rgba,
    pub table_stripe: Rgba,
    pub placeholder: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            tick: Rgba::from_argb(255, 150, 150, 160),
            bar_fill: Rgba::from_argb(255, 96, 156, 255),
            line_stroke: Rgba::from_argb(255, 64, 160, 255),
            point_fill: Rgba::from_argb(255, 74, 105, 189),
            slice_label: Rgba::from_argb(255, 255, 255, 255),
            table_header: Rgba::from_argb(255, 48, 48, 56),
            table_stripe: Rgba::from_argb(255, 28, 28, 32),
            placeholder: Rgba::from_argb(255, 150, 150, 160),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            tick: Rgba::from_argb(255, 100, 100, 110),
            bar_fill: Rgba::from_argb(255, 74, 105, 189),
            line_stroke: Rgba::from_argb(255, 74, 105, 189),
            point_fill: Rgba::from_argb(255, 106, 137, 204),
            slice_label: Rgba::from_argb(255, 255, 255, 255),
            table_header: Rgba::from_argb(255, 225, 228, 238),
            table_stripe: Rgba::from_argb(255, 242, 243, 247),
            placeholder: Rgba::from_argb(255, 120, 120, 130),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::from_argb(255, 0x00, 0x00, 0x00),
            grid: Rgba::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            tick: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
            bar_fill: Rgba::from_argb(255, 0x00, 0xaa, 0xff),
            line_stroke: Rgba::from_argb(255, 0x00, 0xff, 0xff),
            point_fill: Rgba::from_argb(255, 0xff, 0xff, 0x00),
            slice_label: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            table_header: Rgba::from_argb(255, 0x33, 0x33, 0x33),
            table_stripe: Rgba::from_argb(255, 0x11, 0x11, 0x11),
            placeholder: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }

    /// Pie slice colour: hue wheel stepping 60 degrees per slice.
    pub fn slice_color(&self, index: usize) -> Rgba {
        Rgba::from_hsl((index * 60) as f32, 0.7, 0.5)
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
