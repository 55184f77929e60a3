// File: crates/smartstats-core/src/export/report.rs
// Summary: Fixed-layout plain-text analysis report with ASCII frequency bars.

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::profile::DatasetProfile;
use crate::stats::{CategoricalStats, ColumnStats, Mode, NumericStats, NO_MODE};
use crate::text::format_value;

pub const BANNER_WIDTH: usize = 60;
/// Characters used by the longest frequency bar.
pub const FREQUENCY_BAR_WIDTH: usize = 40;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{rule}\n{title}\n{rule}");
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(BANNER_WIDTH));
}

fn list(names: &[String]) -> String {
    if names.is_empty() { "(none)".to_string() } else { names.join(", ") }
}

fn stat(v: f64) -> String {
    format!("{v:.4}")
}

/// Report text for `profile`. The layout is stable; only `generated_at` varies between runs.
pub fn text_report(profile: &DatasetProfile, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    banner(&mut out, "SMARTSTATS DATA ANALYSIS REPORT");
    let _ = writeln!(out, "Generated: {}", generated_at.to_rfc3339_opts(SecondsFormat::Secs, true));

    section(&mut out, "DATASET OVERVIEW");
    let _ = writeln!(out, "Rows:                {}", profile.rows);
    let _ = writeln!(out, "Columns:             {}", profile.columns);
    let _ = writeln!(out, "Numeric columns:     {}", list(&profile.numeric_columns));
    let _ = writeln!(out, "Categorical columns: {}", list(&profile.categorical_columns));

    let numeric: Vec<_> = profile
        .column_stats
        .iter()
        .filter_map(|c| match &c.stats {
            ColumnStats::Numeric(s) => Some((c.name.as_str(), s)),
            ColumnStats::Categorical(_) => None,
        })
        .collect();
    if !numeric.is_empty() {
        section(&mut out, "NUMERIC COLUMNS");
        for (name, s) in numeric {
            numeric_block(&mut out, name, s);
        }
    }

    let categorical: Vec<_> = profile
        .column_stats
        .iter()
        .filter_map(|c| match &c.stats {
            ColumnStats::Categorical(s) => Some((c.name.as_str(), s)),
            ColumnStats::Numeric(_) => None,
        })
        .collect();
    if !categorical.is_empty() {
        section(&mut out, "CATEGORICAL COLUMNS");
        for (name, s) in categorical {
            categorical_block(&mut out, name, s);
        }
    }

    let _ = writeln!(out);
    banner(&mut out, "END OF REPORT");
    out
}

fn numeric_block(out: &mut String, name: &str, s: &NumericStats) {
    let mode = match s.mode {
        Mode::Value(v) => format_value(v),
        Mode::NoUniqueMode => NO_MODE.to_string(),
    };
    let _ = writeln!(out, "\n[{name}]");
    let rows: [(&str, String); 16] = [
        ("Count", s.count.to_string()),
        ("Missing", s.null_count.to_string()),
        ("Sum", stat(s.sum)),
        ("Mean", stat(s.mean)),
        ("Median", stat(s.median)),
        ("Mode", mode),
        ("Std Dev", stat(s.std_dev)),
        ("Variance", stat(s.variance)),
        ("Min", stat(s.min)),
        ("Max", stat(s.max)),
        ("Range", stat(s.range)),
        ("Q1", stat(s.q1)),
        ("Q3", stat(s.q3)),
        ("IQR", stat(s.iqr)),
        ("Skewness", stat(s.skewness)),
        ("Kurtosis", stat(s.kurtosis)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<10} {}", format!("{label}:"), value);
    }
}

fn categorical_block(out: &mut String, name: &str, s: &CategoricalStats) {
    let _ = writeln!(out, "\n[{name}]");
    let _ = writeln!(out, "  {:<14} {}", "Count:", s.count);
    let _ = writeln!(out, "  {:<14} {}", "Missing:", s.null_count);
    let _ = writeln!(out, "  {:<14} {}", "Unique:", s.unique_count);
    match &s.mode {
        Some(m) => {
            let _ = writeln!(out, "  {:<14} {} ({} occurrences)", "Mode:", m, s.mode_frequency);
        }
        None => {
            let _ = writeln!(out, "  {:<14} {}", "Mode:", NO_MODE);
        }
    }
    if s.frequency.is_empty() {
        return;
    }
    let _ = writeln!(out, "  Top values:");
    let label_w = s.frequency.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0).min(20);
    let top = s.frequency.first().map_or(1, |(_, c)| (*c).max(1));
    for (value, count) in &s.frequency {
        let label: String = value.chars().take(20).collect();
        let bar = "#".repeat((count * FREQUENCY_BAR_WIDTH).div_ceil(top));
        let _ = writeln!(out, "    {label:<label_w$} | {bar} {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_table;
    use crate::parser::parse_table;
    use chrono::TimeZone;

    #[test]
    fn layout_has_banners_and_bars() {
        let table = parse_table("city,temp\nOslo,3\nOslo,4\nRome,18");
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let report = text_report(&profile_table(&table), at);
        assert!(report.starts_with(&"=".repeat(BANNER_WIDTH)));
        assert!(report.contains("Generated: 2024-05-01T12:00:00Z"));
        assert!(report.contains("NUMERIC COLUMNS"));
        assert!(report.contains("[temp]"));
        assert!(report.contains("CATEGORICAL COLUMNS"));
        assert!(report.contains(&format!("    Oslo | {} 2", "#".repeat(FREQUENCY_BAR_WIDTH))));
        assert!(report.contains(&format!("    Rome | {} 1", "#".repeat(FREQUENCY_BAR_WIDTH / 2))));
        assert!(report.trim_end().ends_with(&"=".repeat(BANNER_WIDTH)));
    }
}
