// File: crates/smartstats-core/src/geometry/bar.rs
// Summary: Bar layout; one bar per point in input order, height proportional to value / max(values, 1).

use super::{cartesian_axes, category_label, Body, BarMark, Frame, Point, Rect, TextAlign, TextMark, TextRole};
use crate::chart::RenderOptions;
use crate::scale::ValueScale;
use crate::text::format_value;
use crate::types::NormalizedPoint;

/// Bar width as a fraction of its column.
pub const BAR_FILL: f32 = 0.7;

pub(super) fn layout(points: &[NormalizedPoint], frame: &Frame, opts: &RenderOptions) -> Body {
    let plot = frame.plot;
    let max_value = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    // Floor of 1 keeps an all-zero dataset finite.
    let top_value = max_value.max(1.0);
    let scale = ValueScale::new_linear(plot.top, plot.bottom, 0.0, top_value);
    let axes = cartesian_axes(&plot, &scale, opts);

    let slot = plot.width() / points.len() as f32;
    let bar_w = slot * BAR_FILL;
    let value_size = opts.font_size * 0.85;

    let bars = points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let col_left = plot.left + slot * index as f32;
            let cx = col_left + slot / 2.0;
            let h = (p.value.max(0.0) / top_value) as f32 * plot.height();
            let rect = Rect::from_ltrb(cx - bar_w / 2.0, plot.bottom - h, cx + bar_w / 2.0, plot.bottom);
            let value_label = opts.draw_labels.then(|| {
                TextMark::new(format_value(p.value), Point::new(cx, rect.top - 4.0), value_size, TextAlign::Middle, TextRole::Value)
            });
            BarMark {
                index,
                rect,
                column: Rect::from_ltrb(col_left, plot.top, col_left + slot, plot.bottom),
                value: p.value,
                label: category_label(&p.name, cx, slot, frame, opts),
                value_label,
            }
        })
        .collect();

    Body::Bar { axes, bars }
}
