// File: crates/smartstats-core/src/stats.rs
// Summary: Descriptive statistics for numeric arrays and categorical frequency tables.
//
// Policy for degenerate inputs:
// - empty input: every measure is 0, mode is `Mode::NoUniqueMode`
// - zero spread (all values equal): variance, std dev, skewness and kurtosis are 0
// - every value distinct (including a single value): mode is `Mode::NoUniqueMode`

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Frequency table size kept for categorical columns.
pub const TOP_FREQUENCIES: usize = 10;

/// Sentinel text for a column without a unique mode.
pub const NO_MODE: &str = "No mode";

/// Most frequent numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Value(f64),
    /// Every value occurs exactly once.
    NoUniqueMode,
}

impl Mode {
    pub fn value(&self) -> Option<f64> {
        match self {
            Mode::Value(v) => Some(*v),
            Mode::NoUniqueMode => None,
        }
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Mode::Value(v) => s.serialize_f64(*v),
            Mode::NoUniqueMode => s.serialize_str(NO_MODE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub sum: f64,
    pub null_count: usize,
}

impl NumericStats {
    fn empty(total_rows: usize) -> Self {
        Self {
            count: 0,
            mean: 0.0,
            median: 0.0,
            mode: Mode::NoUniqueMode,
            std_dev: 0.0,
            variance: 0.0,
            min: 0.0,
            max: 0.0,
            range: 0.0,
            q1: 0.0,
            q3: 0.0,
            iqr: 0.0,
            skewness: 0.0,
            kurtosis: 0.0,
            sum: 0.0,
            null_count: total_rows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalStats {
    pub count: usize,
    pub unique_count: usize,
    /// Most frequent value; `None` when the column has no values.
    pub mode: Option<String>,
    pub mode_frequency: usize,
    /// Up to ten (value, count) pairs, count descending, ties in first-seen order.
    pub frequency: Vec<(String, usize)>,
    pub null_count: usize,
}

/// Statistics of one column, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

impl ColumnStats {
    pub fn null_count(&self) -> usize {
        match self {
            ColumnStats::Numeric(s) => s.null_count,
            ColumnStats::Categorical(s) => s.null_count,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            ColumnStats::Numeric(s) => s.count,
            ColumnStats::Categorical(s) => s.count,
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle of an ascending slice; mean of the two middles for even lengths.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 0 => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
        _ => sorted[n / 2],
    }
}

/// Nearest-rank quantile: `sorted[floor(n * p)]`.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64 * p).floor() as usize).min(sorted.len() - 1);
    sorted[idx]
}

/// Population variance (divides by n).
pub fn population_variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Mean of the k-th power of standardized values; 0 when there is no spread.
fn standardized_moment(values: &[f64], mean: f64, std_dev: f64, k: i32) -> f64 {
    if values.is_empty() || std_dev <= 0.0 {
        return 0.0;
    }
    values.iter().map(|v| ((v - mean) / std_dev).powi(k)).sum::<f64>() / values.len() as f64
}

fn mode_sorted(sorted: &[f64]) -> Mode {
    let mut best: Option<(f64, usize)> = None;
    let mut i = 0;
    while i < sorted.len() {
        let v = sorted[i];
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == v {
            j += 1;
        }
        let run = j - i;
        if best.map_or(true, |(_, c)| run > c) {
            best = Some((v, run));
        }
        i = j;
    }
    match best {
        Some((v, c)) if c > 1 => Mode::Value(v),
        _ => Mode::NoUniqueMode,
    }
}

/// Full descriptive statistics for the numbers of a column with `total_rows` rows.
pub fn numeric_stats(values: &[f64], total_rows: usize) -> NumericStats {
    let null_count = total_rows.saturating_sub(values.len());
    if values.is_empty() {
        return NumericStats::empty(null_count);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let mean = sum / n as f64;
    let min = sorted[0];
    let max = sorted[n - 1];

    // Equal values can still leave rounding residue in the mean; pin zero spread exactly.
    let variance = if min == max { 0.0 } else { population_variance(&sorted, mean) };
    let std_dev = variance.sqrt();

    let q1 = nearest_rank(&sorted, 0.25);
    let q3 = nearest_rank(&sorted, 0.75);

    NumericStats {
        count: n,
        mean,
        median: median_sorted(&sorted),
        mode: mode_sorted(&sorted),
        std_dev,
        variance,
        min,
        max,
        range: max - min,
        q1,
        q3,
        iqr: q3 - q1,
        skewness: standardized_moment(&sorted, mean, std_dev, 3),
        kurtosis: if std_dev > 0.0 { standardized_moment(&sorted, mean, std_dev, 4) - 3.0 } else { 0.0 },
        sum,
        null_count,
    }
}

/// Frequency table, in first-seen order before sorting.
pub fn frequency_table<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut table: Vec<(String, usize)> = Vec::new();
    for v in values {
        match index.get(v) {
            Some(&i) => table[i].1 += 1,
            None => {
                index.insert(v, table.len());
                table.push((v.to_string(), 1));
            }
        }
    }
    table
}

/// Categorical summary for the non-empty cells of a column with `total_rows` rows.
pub fn categorical_stats(values: &[&str], total_rows: usize) -> CategoricalStats {
    let mut table = frequency_table(values.iter().copied());
    let unique_count = table.len();
    // stable: equal counts keep first-seen order
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table.truncate(TOP_FREQUENCIES);
    let (mode, mode_frequency) = match table.first() {
        Some((v, c)) => (Some(v.clone()), *c),
        None => (None, 0),
    };
    CategoricalStats {
        count: values.len(),
        unique_count,
        mode,
        mode_frequency,
        frequency: table,
        null_count: total_rows.saturating_sub(values.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_picks_smallest_of_tied_repeats() {
        assert_eq!(mode_sorted(&[1.0, 1.0, 2.0, 2.0, 3.0]), Mode::Value(1.0));
        assert_eq!(mode_sorted(&[1.0, 2.0, 3.0]), Mode::NoUniqueMode);
        assert_eq!(mode_sorted(&[4.0]), Mode::NoUniqueMode);
    }

    #[test]
    fn nearest_rank_clamps() {
        assert_eq!(nearest_rank(&[7.0], 0.75), 7.0);
        assert_eq!(nearest_rank(&[1.0, 2.0, 3.0, 4.0], 0.75), 4.0);
    }
}
