// File: crates/smartstats-core/src/geometry/series.rs
// Summary: Line and scatter layout; x by point index, y linear over the value range.

use super::{cartesian_axes, Body, Frame, Point, PointMark, TextAlign, TextMark, TextRole};
use crate::chart::RenderOptions;
use crate::grid::index_position;
use crate::scale::ValueScale;
use crate::text::TextMetrics;
use crate::types::NormalizedPoint;

pub(super) fn layout(points: &[NormalizedPoint], frame: &Frame, opts: &RenderOptions, line: bool) -> Body {
    let plot = frame.plot;
    let (mut vmin, vmax) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));
    if line {
        // Line charts keep the zero baseline in view.
        vmin = vmin.min(0.0);
    }
    let scale = ValueScale::new_linear(plot.top, plot.bottom, vmin, vmax);
    let axes = cartesian_axes(&plot, &scale, opts);

    let radius = if line { opts.font_size / 3.0 } else { opts.font_size * 0.4 };
    let n = points.len();
    let markers: Vec<PointMark> = points
        .iter()
        .enumerate()
        .map(|(index, p)| PointMark {
            index,
            center: Point::new(index_position(index, n, plot.left, plot.right), scale.to_px(p.value)),
            radius,
            value: p.value,
        })
        .collect();

    let x_labels = if opts.draw_labels { thinned_labels(points, &markers, frame, opts) } else { Vec::new() };

    if line {
        let path = markers.iter().map(|m| m.center).collect();
        Body::Line { axes, path, markers, x_labels }
    } else {
        Body::Scatter { axes, markers, x_labels }
    }
}

/// Category labels along x, skipping evenly so neighbours never overlap.
fn thinned_labels(points: &[NormalizedPoint], markers: &[PointMark], frame: &Frame, opts: &RenderOptions) -> Vec<TextMark> {
    let metrics = TextMetrics::new(opts.font_size);
    let n = points.len();
    let widest = points.iter().map(|p| metrics.measure(&p.name)).fold(0.0f32, f32::max);
    let spacing = if n > 1 { frame.plot.width() / (n - 1) as f32 } else { frame.plot.width() };
    let step = if widest + 8.0 <= spacing { 1 } else { ((widest + 8.0) / spacing.max(1.0)).ceil() as usize };
    let room = (spacing * step as f32 - 8.0).max(0.0);
    let baseline = frame.plot.bottom + opts.font_size + 4.0;

    markers
        .iter()
        .step_by(step.max(1))
        .map(|m| {
            let text = metrics.truncate_to_width(&points[m.index].name, room);
            TextMark::new(text, Point::new(m.center.x, baseline), opts.font_size, TextAlign::Middle, TextRole::AxisLabel)
        })
        .collect()
}
