// File: crates/smartstats-core/src/paint.rs
// Summary: Surface trait and the single painter that draws a Geometry onto any surface.

use crate::geometry::{Axes, Body, Geometry, Point, Rect, RowKind, TextMark, TextRole};
use crate::theme::{Rgba, Theme};

pub const GRID_STROKE: f32 = 1.0;
pub const AXIS_STROKE: f32 = 1.5;
pub const LINE_STROKE: f32 = 2.0;

/// Drawing primitives a chart surface must offer. Coordinates are pixels,
/// angles degrees (0 = 3 o'clock, clockwise). `index` tags a mark with the
/// data point it represents.
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba, index: Option<usize>);
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f32);
    fn stroke_polyline(&mut self, points: &[Point], color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba, index: Option<usize>);
    fn fill_wedge(&mut self, center: Point, radius: f32, start_deg: f32, sweep_deg: f32, color: Rgba, index: Option<usize>);
    fn draw_text(&mut self, mark: &TextMark, color: Rgba);
}

pub fn text_color(theme: &Theme, role: TextRole) -> Rgba {
    match role {
        TextRole::Title | TextRole::AxisLabel | TextRole::Header | TextRole::Cell => theme.axis_label,
        TextRole::Tick | TextRole::Value => theme.tick,
        TextRole::SliceLabel => theme.slice_label,
        TextRole::Placeholder => theme.placeholder,
    }
}

/// Draw `geometry` onto `surface`. Every surface goes through here.
pub fn paint<S: Surface + ?Sized>(geometry: &Geometry, theme: &Theme, surface: &mut S) {
    surface.clear(theme.background);

    match &geometry.body {
        Body::Bar { axes, bars } => {
            draw_axes(axes, theme, surface);
            for b in bars {
                surface.fill_rect(b.rect, theme.bar_fill, Some(b.index));
                text(&b.label, theme, surface);
                if let Some(v) = &b.value_label {
                    text(v, theme, surface);
                }
            }
        }
        Body::Line { axes, path, markers, x_labels } => {
            draw_axes(axes, theme, surface);
            if path.len() >= 2 {
                surface.stroke_polyline(path, theme.line_stroke, LINE_STROKE);
            }
            for m in markers {
                surface.fill_circle(m.center, m.radius, theme.point_fill, Some(m.index));
            }
            x_labels.iter().for_each(|l| text(l, theme, surface));
        }
        Body::Scatter { axes, markers, x_labels } => {
            draw_axes(axes, theme, surface);
            for m in markers {
                surface.fill_circle(m.center, m.radius, theme.point_fill, Some(m.index));
            }
            x_labels.iter().for_each(|l| text(l, theme, surface));
        }
        Body::Pie { slices } => {
            for s in slices {
                let color = theme.slice_color(s.index);
                surface.fill_wedge(s.center, s.radius, s.start_deg, s.sweep_deg, color, Some(s.index));
            }
            // Labels after wedges so no wedge covers a neighbour's label.
            for l in slices.iter().filter_map(|s| s.label.as_ref()) {
                text(l, theme, surface);
            }
        }
        Body::Table { rows, .. } => {
            for r in rows {
                match r.kind {
                    RowKind::Header => surface.fill_rect(r.rect, theme.table_header, None),
                    RowKind::Data if r.striped => surface.fill_rect(r.rect, theme.table_stripe, r.index),
                    _ => {}
                }
                let bottom_left = Point::new(r.rect.left, r.rect.bottom);
                surface.stroke_line(bottom_left, Point::new(r.rect.right, r.rect.bottom), theme.grid, GRID_STROKE);
                r.cells.iter().for_each(|c| text(c, theme, surface));
            }
        }
        Body::Empty { message } => text(message, theme, surface),
    }

    if let Some(title) = &geometry.title {
        text(title, theme, surface);
    }
}

fn draw_axes<S: Surface + ?Sized>(axes: &Axes, theme: &Theme, surface: &mut S) {
    for g in &axes.grid {
        surface.stroke_line(g.from, g.to, theme.grid, GRID_STROKE);
    }
    surface.stroke_line(axes.x_line.from, axes.x_line.to, theme.axis_line, AXIS_STROKE);
    surface.stroke_line(axes.y_line.from, axes.y_line.to, theme.axis_line, AXIS_STROKE);
    axes.ticks.iter().for_each(|t| text(t, theme, surface));
}

fn text<S: Surface + ?Sized>(mark: &TextMark, theme: &Theme, surface: &mut S) {
    if !mark.text.is_empty() {
        surface.draw_text(mark, text_color(theme, mark.role));
    }
}
