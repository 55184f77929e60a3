// File: crates/smartstats-core/src/geometry/pie.rs
// Summary: Pie layout; consecutive wedges from 12 o'clock in input order, labels hidden on thin slices.

use super::{Body, Frame, Point, Slice, TextAlign, TextMark, TextRole};
use crate::chart::{PieLabelStyle, RenderOptions};
use crate::types::NormalizedPoint;

pub const START_DEG: f32 = -90.0;

/// Pie radius as a fraction of half the shorter plot side.
const RADIUS_FILL: f32 = 0.9;
/// Label distance from the centre as a fraction of the radius.
const LABEL_RADIUS: f32 = 0.65;

/// None when the total is not positive, so the caller shows the no-data placeholder.
pub(super) fn layout(points: &[NormalizedPoint], frame: &Frame, opts: &RenderOptions) -> Option<Body> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if !(total > 0.0) {
        return None;
    }
    let center = frame.plot.center();
    let radius = RADIUS_FILL * frame.plot.width().min(frame.plot.height()) / 2.0;
    let threshold = opts.pie_labels.min_share();
    let label_size = opts.font_size * 0.9;

    let mut slices: Vec<Slice> = Vec::new();
    let mut acc = 0.0f64;
    for (index, p) in points.iter().enumerate() {
        let value = p.value.max(0.0);
        if value <= 0.0 {
            continue;
        }
        let share = value / total;
        let start = START_DEG + (acc * 360.0) as f32;
        acc += share;
        let end = START_DEG + (acc * 360.0) as f32;
        let sweep = end - start;
        if sweep <= 0.0 {
            continue;
        }
        let label = (opts.draw_labels && share >= threshold).then(|| {
            let mid = (start + sweep / 2.0).to_radians();
            let at = Point::new(center.x + radius * LABEL_RADIUS * mid.cos(), center.y + radius * LABEL_RADIUS * mid.sin());
            let text = match opts.pie_labels {
                PieLabelStyle::PercentAndName => format!("{} {:.1}%", p.name, share * 100.0),
                PieLabelStyle::NameOnly => p.name.clone(),
            };
            TextMark::new(text, Point::new(at.x, at.y + label_size * 0.35), label_size, TextAlign::Middle, TextRole::SliceLabel)
        });
        slices.push(Slice { index, center, radius, start_deg: start, sweep_deg: sweep, share, label });
    }

    // Close the circle exactly despite rounding.
    if let Some(last) = slices.last_mut() {
        last.sweep_deg = START_DEG + 360.0 - last.start_deg;
    }
    Some(Body::Pie { slices })
}

pub(super) fn hit(slices: &[Slice], x: f32, y: f32) -> Option<usize> {
    let first = slices.first()?;
    if first.center.distance(x, y) > first.radius {
        return None;
    }
    let angle = (y - first.center.y).atan2(x - first.center.x).to_degrees();
    let rel = (angle - START_DEG).rem_euclid(360.0);
    slices
        .iter()
        .find(|s| {
            let s0 = s.start_deg - START_DEG;
            rel >= s0 && rel < s0 + s.sweep_deg
        })
        .map(|s| s.index)
}
