// File: crates/smartstats-core/src/geometry/table.rs
// Summary: Table layout; fixed row height, overflow collapsed into a "+N more rows" summary row.

use super::{Body, Frame, Point, Rect, RowKind, TableRow, TextAlign, TextMark, TextRole};
use crate::chart::RenderOptions;
use crate::text::{format_value, TextMetrics};
use crate::types::NormalizedPoint;

/// Share of the table width given to the name column.
const NAME_COLUMN: f32 = 0.6;
const CELL_PAD: f32 = 8.0;

/// Data rows that fit below the header in `height` pixels.
pub fn capacity(height: f32, row_height: f32) -> usize {
    if row_height <= 0.0 {
        return 0;
    }
    ((height - row_height) / row_height).floor().max(0.0) as usize
}

pub(super) fn layout(points: &[NormalizedPoint], frame: &Frame, opts: &RenderOptions) -> Body {
    // Tables ignore the axis gutters and use the inner frame.
    let pad = opts.insets.right as f32;
    let area = Rect::from_ltrb(pad, frame.plot.top, (frame.width - pad).max(pad), (frame.height - pad).max(frame.plot.top));
    let row_h = opts.table_row_height.max(1.0);
    let cap = capacity(area.height(), row_h);

    let (shown, hidden) = if points.len() <= cap {
        (points.len(), 0)
    } else {
        let shown = cap.saturating_sub(1);
        (shown, points.len() - shown)
    };

    let metrics = TextMetrics::new(opts.font_size);
    let name_w = area.width() * NAME_COLUMN;
    let value_w = area.width() - name_w;
    let row_rect = |slot: usize| Rect::from_ltwh(area.left, area.top + row_h * slot as f32, area.width(), row_h);
    let baseline = |rect: &Rect| rect.top + row_h / 2.0 + opts.font_size * 0.35;
    let cell = |text: &str, rect: &Rect, value_col: bool, role: TextRole| {
        let (x, w) = if value_col { (area.left + name_w, value_w) } else { (area.left, name_w) };
        let text = metrics.truncate_to_width(text, w - 2.0 * CELL_PAD);
        TextMark::new(text, Point::new(x + CELL_PAD, baseline(rect)), opts.font_size, TextAlign::Start, role)
    };

    let mut rows = Vec::with_capacity(shown + 2);
    let header = row_rect(0);
    rows.push(TableRow {
        kind: RowKind::Header,
        index: None,
        rect: header,
        striped: false,
        cells: vec![cell("Name", &header, false, TextRole::Header), cell("Value", &header, true, TextRole::Header)],
    });
    for (i, p) in points.iter().take(shown).enumerate() {
        let rect = row_rect(i + 1);
        rows.push(TableRow {
            kind: RowKind::Data,
            index: Some(i),
            rect,
            striped: i % 2 == 1,
            cells: vec![cell(&p.name, &rect, false, TextRole::Cell), cell(&format_value(p.value), &rect, true, TextRole::Cell)],
        });
    }
    if hidden > 0 {
        let rect = row_rect(shown + 1);
        rows.push(TableRow {
            kind: RowKind::Summary,
            index: None,
            rect,
            striped: false,
            cells: vec![cell(&format!("+{hidden} more rows"), &rect, false, TextRole::Placeholder)],
        });
    }

    Body::Table { rows, hidden }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_geometry;
    use crate::types::ChartType;

    #[test]
    fn capacity_counts_rows_below_header() {
        assert_eq!(capacity(100.0, 25.0), 3);
        assert_eq!(capacity(20.0, 25.0), 0);
        assert_eq!(capacity(100.0, 0.0), 0);
    }

    #[test]
    fn overflow_appends_summary_row() {
        let pts: Vec<_> = (0..100).map(|i| NormalizedPoint::new(format!("r{i}"), i as f64)).collect();
        let g = compute_geometry(ChartType::Table, "", &pts, &RenderOptions::interactive());
        let Body::Table { rows, hidden } = g.body else { panic!("expected table") };
        let data = rows.iter().filter(|r| r.kind == RowKind::Data).count();
        assert_eq!(data + hidden, 100);
        let last = rows.last().unwrap();
        assert_eq!(last.kind, RowKind::Summary);
        assert_eq!(last.cells[0].text, format!("+{hidden} more rows"));
        assert!(last.rect.bottom <= g.frame.height);
    }

    #[test]
    fn small_input_has_no_summary() {
        let pts = vec![NormalizedPoint::new("a", 1.0), NormalizedPoint::new("b", 2.5)];
        let g = compute_geometry(ChartType::Table, "", &pts, &RenderOptions::interactive());
        let Body::Table { rows, hidden } = g.body else { panic!("expected table") };
        assert_eq!(hidden, 0);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].cells[1].text, "2.50");
    }
}
