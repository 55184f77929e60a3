// File: crates/smartstats-render-skia/src/lib.rs
// Summary: Offscreen Skia CPU raster surface; draws core chart geometry and encodes PNG for export.

pub mod text;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use skia_safe as skia;
use tracing::debug;

use smartstats_core::geometry::{Point, Rect, TextMark};
use smartstats_core::{paint, ChartCard, ChartSpec, Geometry, RasterBackend, RenderError, RenderOptions, Rgba, Surface, Theme};

pub use text::TextShaper;

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `Surface` adapter over a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn fill(c: Rgba) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Fill);
        p.set_color(color(c));
        p
    }

    fn stroke(c: Rgba, width: f32) -> skia::Paint {
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(width);
        p.set_color(color(c));
        p
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear(&mut self, c: Rgba) {
        self.canvas.clear(color(c));
    }

    fn fill_rect(&mut self, r: Rect, c: Rgba, _index: Option<usize>) {
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return;
        }
        self.canvas.draw_rect(skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom), &Self::fill(c));
    }

    fn stroke_line(&mut self, from: Point, to: Point, c: Rgba, width: f32) {
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &Self::stroke(c, width));
    }

    fn stroke_polyline(&mut self, points: &[Point], c: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        let mut paint = Self::stroke(c, width);
        paint.set_stroke_join(skia::paint::Join::Round);
        self.canvas.draw_path(&path, &paint);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, c: Rgba, _index: Option<usize>) {
        self.canvas.draw_circle((center.x, center.y), radius, &Self::fill(c));
    }

    fn fill_wedge(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32, c: Rgba, index: Option<usize>) {
        if sweep_deg >= 359.99 {
            self.fill_circle(center, radius, c, index);
            return;
        }
        let oval = skia::Rect::from_ltrb(center.x - radius, center.y - radius, center.x + radius, center.y + radius);
        self.canvas.draw_arc(oval, start_deg, sweep_deg, true, &Self::fill(c));
    }

    fn draw_text(&mut self, mark: &TextMark, c: Rgba) {
        self.shaper.draw_mark(self.canvas, mark, color(c));
    }
}

/// Paint `geometry` onto a fresh CPU raster surface and read it back as unpremultiplied RGBA.
pub fn render_to_rgba8(geometry: &Geometry, theme: &Theme, shaper: &TextShaper) -> Result<RgbaImage, RenderError> {
    let w = geometry.frame.width.round().max(1.0) as i32;
    let h = geometry.frame.height.round().max(1.0) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| RenderError::Surface(format!("failed to create {w}x{h} raster surface")))?;

    {
        let mut target = SkiaSurface::new(surface.canvas(), shaper);
        paint(geometry, theme, &mut target);
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(RenderError::Surface("reading raster pixels failed".to_string()));
    }
    RgbaImage::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| RenderError::Surface("pixel buffer does not match surface size".to_string()))
}

/// PNG-encode an RGBA buffer. An encoder that produces nothing is an error.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    if bytes.is_empty() {
        return Err(RenderError::EmptyImage);
    }
    Ok(bytes)
}

/// Export rasterizer backed by Skia's CPU raster surfaces.
pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    pub fn shaper(&self) -> &TextShaper { &self.shaper }

    /// Rasterize `spec` at `opts` through a chart card, so empty data fails the same way it does interactively.
    pub fn render_png(&self, spec: &ChartSpec, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut card = ChartCard::with_spec(spec.clone(), opts);
        card.export_png(self, opts)
    }
}

impl RasterBackend for SkiaRenderer {
    fn rasterize(&self, geometry: &Geometry, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let img = render_to_rgba8(geometry, &opts.theme, &self.shaper)?;
        let png = encode_png(&img)?;
        debug!(width = img.width(), height = img.height(), bytes = png.len(), "rasterized chart");
        Ok(png)
    }
}
