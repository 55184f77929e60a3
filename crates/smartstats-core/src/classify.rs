// File: crates/smartstats-core/src/classify.rs
// Summary: Numeric/categorical column classification over raw cell text.

use serde::{Deserialize, Serialize};

/// Share of non-empty cells that must parse as numbers for a column to be numeric.
pub const NUMERIC_THRESHOLD: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Parse a cell as a finite float. Surrounding whitespace is ignored.
pub fn parse_number(cell: &str) -> Option<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A column's cells split into what the statistics engine consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedColumn<'a> {
    pub name: &'a str,
    pub kind: ColumnKind,
    /// Total number of rows in the table.
    pub total: usize,
    /// Non-empty cells in row order.
    pub present: Vec<&'a str>,
    /// Cells of `present` that parsed as numbers, in row order.
    pub numbers: Vec<f64>,
}

/// Classify one column. Numeric iff parsed numbers exceed 80% of the non-empty
/// cells; a column with no non-empty cells is categorical.
pub fn classify_column<'a>(name: &'a str, cells: impl IntoIterator<Item = &'a str>) -> ClassifiedColumn<'a> {
    let mut total = 0usize;
    let mut present = Vec::new();
    let mut numbers = Vec::new();
    for cell in cells {
        total += 1;
        if cell.trim().is_empty() {
            continue;
        }
        present.push(cell);
        if let Some(v) = parse_number(cell) {
            numbers.push(v);
        }
    }
    let kind = if !present.is_empty() && numbers.len() as f64 > present.len() as f64 * NUMERIC_THRESHOLD {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    };
    ClassifiedColumn { name, kind, total, present, numbers }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_a_few_dirty_cells() {
        let cells = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "n/a"];
        let c = classify_column("v", cells);
        assert_eq!(c.kind, ColumnKind::Numeric);
        assert_eq!(c.numbers.len(), 9);
    }

    #[test]
    fn exactly_eighty_percent_is_categorical() {
        let c = classify_column("v", ["1", "2", "3", "4", "x"]);
        assert_eq!(c.kind, ColumnKind::Categorical);
    }

    #[test]
    fn all_empty_is_categorical() {
        let c = classify_column("v", ["", " ", ""]);
        assert_eq!(c.kind, ColumnKind::Categorical);
        assert_eq!(c.total, 3);
        assert!(c.present.is_empty());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
    }

    #[test]
    fn unit_suffixed_cells_are_not_numbers() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("12kg"), None);
        let c = classify_column("weight", ["12kg", "30kg", "7kg"]);
        assert_eq!(c.kind, ColumnKind::Categorical);
        assert!(c.numbers.is_empty());
    }
}
