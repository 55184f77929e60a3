// File: crates/smartstats-core/src/svg.rs
// Summary: Retained vector surface producing an SVG document for interactive chart cards.

use std::fmt::Write as _;

use crate::chart::{ChartSpec, RenderOptions};
use crate::geometry::{compute_geometry, Point, Rect, TextAlign, TextMark};
use crate::paint::{paint, Surface};
use crate::theme::Rgba;

const FONT_FAMILY: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";

/// Collects SVG elements; `finish` wraps them into a document.
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT_FAMILY}\">\n{body}</svg>\n",
            w = num(self.width),
            h = num(self.height),
            body = self.body,
        )
    }
}

fn num(v: f32) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r.fract() == 0.0 { format!("{r:.0}") } else { format!("{r}") }
}

fn fill_attrs(c: Rgba) -> String {
    if c.a == 255 {
        format!("fill=\"{}\"", c.to_hex())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{:.3}\"", c.to_hex(), c.opacity())
    }
}

fn index_attr(index: Option<usize>) -> String {
    index.map(|i| format!(" data-index=\"{i}\"")).unwrap_or_default()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        let _ = writeln!(self.body, "<rect width=\"100%\" height=\"100%\" {}/>", fill_attrs(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, index: Option<usize>) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}{}/>",
            num(rect.left),
            num(rect.top),
            num(rect.width()),
            num(rect.height()),
            fill_attrs(color),
            index_attr(index),
        );
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            color.to_hex(),
            num(width),
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f32) {
        let pts: Vec<String> = points.iter().map(|p| format!("{},{}", num(p.x), num(p.y))).collect();
        let _ = writeln!(
            self.body,
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>",
            pts.join(" "),
            color.to_hex(),
            num(width),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba, index: Option<usize>) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}{}/>",
            num(center.x),
            num(center.y),
            num(radius),
            fill_attrs(color),
            index_attr(index),
        );
    }

    fn fill_wedge(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32, color: Rgba, index: Option<usize>) {
        if sweep_deg >= 359.99 {
            self.fill_circle(center, radius, color, index);
            return;
        }
        let at = |deg: f32| {
            let r = deg.to_radians();
            (center.x + radius * r.cos(), center.y + radius * r.sin())
        };
        let (x0, y0) = at(start_deg);
        let (x1, y1) = at(start_deg + sweep_deg);
        let large = if sweep_deg > 180.0 { 1 } else { 0 };
        let _ = writeln!(
            self.body,
            "<path d=\"M{} {} L{} {} A{} {} 0 {} 1 {} {} Z\" {}{}/>",
            num(center.x),
            num(center.y),
            num(x0),
            num(y0),
            num(radius),
            num(radius),
            large,
            num(x1),
            num(y1),
            fill_attrs(color),
            index_attr(index),
        );
    }

    fn draw_text(&mut self, mark: &TextMark, color: Rgba) {
        let anchor = match mark.align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
            TextAlign::End => "end",
        };
        let transform = if mark.rotation != 0.0 {
            format!(" transform=\"rotate({} {} {})\"", num(mark.rotation), num(mark.anchor.x), num(mark.anchor.y))
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" {}{}>{}</text>",
            num(mark.anchor.x),
            num(mark.anchor.y),
            num(mark.size),
            anchor,
            fill_attrs(color),
            transform,
            escape(&mark.text),
        );
    }
}

/// Interactive rendering of a chart as an SVG document.
pub fn render_svg(spec: &ChartSpec, opts: &RenderOptions) -> String {
    let opts = spec.render_options(*opts);
    let geometry = compute_geometry(spec.chart_type, &spec.title, &spec.points, &opts);
    let mut surface = SvgSurface::new(geometry.frame.width, geometry.frame.height);
    paint(&geometry, &opts.theme, &mut surface);
    surface.finish()
}
