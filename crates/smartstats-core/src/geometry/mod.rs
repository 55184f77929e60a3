// File: crates/smartstats-core/src/geometry/mod.rs
// Summary: Surface-independent chart geometry: positions, sizes and label placements for every chart kind.
//
// `compute_geometry` is pure. Both the vector and the raster surface draw the
// same descriptor, so the two can never disagree about where a mark sits.

mod bar;
mod pie;
mod series;
mod table;

use serde::Serialize;
use tracing::debug;

use crate::chart::RenderOptions;
use crate::grid::linspace;
use crate::scale::ValueScale;
use crate::text::{format_value, TextMetrics};
use crate::types::{ChartType, NormalizedPoint};

/// Shown instead of a chart when there is nothing drawable.
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Number of value-axis ticks on cartesian charts.
pub const Y_TICKS: usize = 5;

/// Extra pointer slack around point markers when hit testing.
pub const HIT_TOLERANCE: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn distance(&self, x: f32, y: f32) -> f32 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { (self.right - self.left).max(0.0) }
    pub fn height(&self) -> f32 { (self.bottom - self.top).max(0.0) }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self { Self { from, to } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// What a piece of text is, so surfaces can pick its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    Title,
    AxisLabel,
    Tick,
    Value,
    SliceLabel,
    Header,
    Cell,
    Placeholder,
}

/// A positioned label. `anchor` is the baseline point; `rotation` is in degrees, clockwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextMark {
    pub text: String,
    pub anchor: Point,
    pub size: f32,
    pub align: TextAlign,
    pub rotation: f32,
    pub role: TextRole,
}

impl TextMark {
    pub fn new(text: impl Into<String>, anchor: Point, size: f32, align: TextAlign, role: TextRole) -> Self {
        Self { text: text.into(), anchor, size, align, rotation: 0.0, role }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Axis lines, horizontal grid lines and value ticks of a cartesian chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axes {
    pub x_line: Segment,
    pub y_line: Segment,
    pub grid: Vec<Segment>,
    pub ticks: Vec<TextMark>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarMark {
    pub index: usize,
    pub rect: Rect,
    /// Full-height column the bar sits in; the hover target.
    pub column: Rect,
    pub value: f64,
    pub label: TextMark,
    pub value_label: Option<TextMark>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointMark {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    pub value: f64,
}

/// One pie wedge. Angles in degrees, 0 = 3 o'clock, growing clockwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub share: f64,
    pub label: Option<TextMark>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Header,
    Data,
    Summary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub kind: RowKind,
    /// Index of the data point shown; None for header and summary rows.
    pub index: Option<usize>,
    pub rect: Rect,
    pub striped: bool,
    pub cells: Vec<TextMark>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Body {
    Bar { axes: Axes, bars: Vec<BarMark> },
    Line { axes: Axes, path: Vec<Point>, markers: Vec<PointMark>, x_labels: Vec<TextMark> },
    Scatter { axes: Axes, markers: Vec<PointMark>, x_labels: Vec<TextMark> },
    Pie { slices: Vec<Slice> },
    Table { rows: Vec<TableRow>, hidden: usize },
    Empty { message: TextMark },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub plot: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geometry {
    pub frame: Frame,
    pub title: Option<TextMark>,
    pub body: Body,
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, Body::Empty { .. })
    }

    /// Index of the data point under `(x, y)`, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        match &self.body {
            Body::Bar { bars, .. } => bars.iter().find(|b| b.column.contains(x, y)).map(|b| b.index),
            Body::Line { markers, .. } | Body::Scatter { markers, .. } => markers
                .iter()
                .map(|m| (m, m.center.distance(x, y)))
                .filter(|(m, d)| *d <= m.radius + HIT_TOLERANCE)
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(m, _)| m.index),
            Body::Pie { slices } => pie::hit(slices, x, y),
            Body::Table { rows, .. } => rows
                .iter()
                .find(|r| r.kind == RowKind::Data && r.rect.contains(x, y))
                .and_then(|r| r.index),
            Body::Empty { .. } => None,
        }
    }
}

/// Lay out `points` as `chart_type` on a surface described by `opts`.
pub fn compute_geometry(
    chart_type: ChartType,
    title: &str,
    points: &[NormalizedPoint],
    opts: &RenderOptions,
) -> Geometry {
    let frame = frame_for(opts);
    let title = title_mark(title, &frame, opts);
    let body = if points.is_empty() {
        empty_body(&frame, opts)
    } else {
        match chart_type {
            ChartType::Bar => bar::layout(points, &frame, opts),
            ChartType::Line => series::layout(points, &frame, opts, true),
            ChartType::Scatter => series::layout(points, &frame, opts, false),
            ChartType::Pie => pie::layout(points, &frame, opts).unwrap_or_else(|| empty_body(&frame, opts)),
            ChartType::Table => table::layout(points, &frame, opts),
        }
    };
    debug!(chart_type = %chart_type, points = points.len(), width = opts.width, height = opts.height, "geometry computed");
    Geometry { frame, title, body }
}

fn frame_for(opts: &RenderOptions) -> Frame {
    let width = opts.width.max(1) as f32;
    let height = opts.height.max(1) as f32;
    let i = opts.insets;
    let left = (i.left as f32).min(width);
    let top = (i.top as f32).min(height);
    let plot = Rect::from_ltrb(left, top, (width - i.right as f32).max(left), (height - i.bottom as f32).max(top));
    Frame { width, height, plot }
}

fn title_mark(title: &str, frame: &Frame, opts: &RenderOptions) -> Option<TextMark> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let size = opts.font_size * 1.15;
    let metrics = TextMetrics::new(size);
    let text = metrics.truncate_to_width(title, frame.width - 16.0);
    let baseline = (frame.plot.top - size * 0.4).max(size);
    Some(TextMark::new(text, Point::new(frame.width / 2.0, baseline), size, TextAlign::Middle, TextRole::Title))
}

pub(crate) fn empty_body(frame: &Frame, opts: &RenderOptions) -> Body {
    let at = Point::new(frame.width / 2.0, frame.height / 2.0 + opts.font_size * 0.35);
    Body::Empty { message: TextMark::new(NO_DATA_MESSAGE, at, opts.font_size, TextAlign::Middle, TextRole::Placeholder) }
}

/// Axis lines plus `Y_TICKS` gridlines labelled along the value scale.
pub(crate) fn cartesian_axes(plot: &Rect, scale: &ValueScale, opts: &RenderOptions) -> Axes {
    let tick_size = opts.font_size * 0.9;
    let mut grid = Vec::with_capacity(Y_TICKS);
    let mut ticks = Vec::with_capacity(Y_TICKS);
    for v in linspace(scale.vmin, scale.vmax, Y_TICKS) {
        let y = scale.to_px(v);
        grid.push(Segment::new(Point::new(plot.left, y), Point::new(plot.right, y)));
        if opts.draw_labels {
            ticks.push(TextMark::new(
                format_value(v),
                Point::new(plot.left - 6.0, y + tick_size * 0.35),
                tick_size,
                TextAlign::End,
                TextRole::Tick,
            ));
        }
    }
    Axes {
        x_line: Segment::new(Point::new(plot.left, plot.bottom), Point::new(plot.right, plot.bottom)),
        y_line: Segment::new(Point::new(plot.left, plot.top), Point::new(plot.left, plot.bottom)),
        grid,
        ticks,
    }
}

/// Category label under a column of width `slot` centred on `cx`.
/// Labels wider than the slot are rotated -45 degrees and cut to the space below the axis.
pub(crate) fn category_label(name: &str, cx: f32, slot: f32, frame: &Frame, opts: &RenderOptions) -> TextMark {
    let metrics = TextMetrics::new(opts.font_size);
    let below = frame.plot.bottom;
    if metrics.measure(name) <= slot {
        return TextMark::new(name, Point::new(cx, below + opts.font_size + 4.0), opts.font_size, TextAlign::Middle, TextRole::AxisLabel);
    }
    let room = ((frame.height - below - 6.0) * std::f32::consts::SQRT_2).max(0.0);
    let text = metrics.truncate_to_width(name, room);
    TextMark::new(text, Point::new(cx, below + opts.font_size * 0.8 + 2.0), opts.font_size, TextAlign::End, TextRole::AxisLabel)
        .rotated(-45.0)
}
