// File: crates/smartstats-core/src/scale.rs
// Summary: Value (Y) scale mapping a data range onto inverted pixel space.

/// Value Y coordinate (e.g., a cell value).
pub type Value = f64;

/// Vertical value scale mapping data range to [top, bottom] pixels.
/// Higher values map to smaller y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    /// Linear scale; a zero-width range is widened by one unit upward.
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
