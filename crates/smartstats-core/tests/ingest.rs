// File: crates/smartstats-core/tests/ingest.rs
// Purpose: Parsing, classification and statistics over whole tables.

use smartstats_core::stats::{numeric_stats, NO_MODE};
use smartstats_core::{parse_table, profile_table, Analysis, ColumnKind, ColumnStats, Mode};

fn numeric(stats: &ColumnStats) -> &smartstats_core::NumericStats {
    match stats {
        ColumnStats::Numeric(s) => s,
        other => panic!("expected numeric stats, got {other:?}"),
    }
}

#[test]
fn scenario_numeric_column() {
    let profile = profile_table(&parse_table("v\n1\n2\n3\n4\n5"));
    let s = numeric(&profile.column("v").unwrap().stats);
    assert_eq!(s.mean, 3.0);
    assert_eq!(s.median, 3.0);
    assert_eq!(s.variance, 2.0);
    assert!((s.std_dev - 2f64.sqrt()).abs() < 1e-12);
    assert_eq!(s.q1, 2.0);
    assert_eq!(s.q3, 4.0);
    assert_eq!(s.iqr, 2.0);
    assert!(s.skewness.abs() < 1e-12);
    assert_eq!(s.mode, Mode::NoUniqueMode);
    assert_eq!(s.sum, 15.0);
    assert_eq!(s.range, 4.0);
}

#[test]
fn scenario_categorical_column() {
    let profile = profile_table(&parse_table("c\nx\nx\ny"));
    let col = profile.column("c").unwrap();
    assert_eq!(col.kind, ColumnKind::Categorical);
    let ColumnStats::Categorical(s) = &col.stats else { panic!("expected categorical") };
    assert_eq!(s.unique_count, 2);
    assert_eq!(s.mode.as_deref(), Some("x"));
    assert_eq!(s.mode_frequency, 2);
    assert_eq!(s.frequency, vec![("x".to_string(), 2), ("y".to_string(), 1)]);
}

#[test]
fn quartiles_are_ordered_and_variance_non_negative() {
    let samples: [&[f64]; 5] = [
        &[3.0],
        &[1.0, 100.0],
        &[5.0, -2.0, 7.5, 7.5, 0.0, 13.0],
        &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
        &[-4.0, -4.0, -4.0, 2.0, 9.0, 11.0, 11.5],
    ];
    for values in samples {
        let s = numeric_stats(values, values.len());
        assert!(s.min <= s.q1, "{values:?}");
        assert!(s.q1 <= s.median, "{values:?}");
        assert!(s.median <= s.q3, "{values:?}");
        assert!(s.q3 <= s.max, "{values:?}");
        assert!(s.variance >= 0.0);
        assert!((s.std_dev - s.variance.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn constant_column_has_zero_spread_and_shape() {
    let s = numeric_stats(&[4.2, 4.2, 4.2], 3);
    assert_eq!(s.variance, 0.0);
    assert_eq!(s.std_dev, 0.0);
    assert_eq!(s.skewness, 0.0);
    assert_eq!(s.kurtosis, 0.0);
    assert_eq!(s.mode, Mode::Value(4.2));
}

#[test]
fn empty_and_all_missing_columns_are_not_fatal() {
    let s = numeric_stats(&[], 4);
    assert_eq!(s.count, 0);
    assert_eq!(s.null_count, 4);
    assert_eq!(s.mean, 0.0);

    let profile = profile_table(&parse_table("a,b\n1,\n2,\n3,"));
    let b = profile.column("b").unwrap();
    assert_eq!(b.kind, ColumnKind::Categorical);
    assert_eq!(b.stats.null_count(), 3);
    let ColumnStats::Categorical(s) = &b.stats else { panic!("expected categorical") };
    assert_eq!(s.mode, None);
}

#[test]
fn overview_lists_columns_in_header_order() {
    let profile = profile_table(&parse_table(" city , temp ,rain\r\nOslo,3,yes\r\n\r\nRome,18,no\r\n"));
    assert_eq!(profile.rows, 2);
    assert_eq!(profile.columns, 3);
    assert_eq!(profile.column_names, vec!["city", "temp", "rain"]);
    assert_eq!(profile.numeric_columns, vec!["temp"]);
    assert_eq!(profile.categorical_columns, vec!["city", "rain"]);
}

#[test]
fn ragged_rows_are_padded() {
    let table = parse_table("a,b,c\n1,2\n4,5,6,7");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].get("c"), "");
    assert_eq!(table.rows()[1].get("c"), "6");
    assert_eq!(table.rows()[1].len(), 3);
}

#[test]
fn reingest_replaces_the_whole_profile() {
    let mut analysis = Analysis::new();
    let first = analysis.ingest("a\n1\n2");
    let second = analysis.ingest("b,c\nx,1");
    assert_eq!(first.column_names, vec!["a"]);
    assert_eq!(second.column_names, vec!["b", "c"]);
    assert_eq!(analysis.profile().column_names, vec!["b", "c"]);
    assert_eq!(analysis.table().row_count(), 1);
}

#[test]
fn profile_serializes_with_mode_sentinel() {
    let profile = profile_table(&parse_table("v\n1\n2"));
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["columnStats"][0]["stats"]["type"], "numeric");
    assert_eq!(json["columnStats"][0]["stats"]["mode"], NO_MODE);
    assert_eq!(json["numericColumns"][0], "v");
}

#[test]
fn empty_label_cell_keeps_the_numeric_value() {
    let table = parse_table("sales,region\n12,\n30,North");
    let spec = smartstats_core::ChartSpec::from_table("t", smartstats_core::ChartType::Bar, &table);
    let points: Vec<(&str, f64)> = spec.points.iter().map(|p| (p.name.as_str(), p.value)).collect();
    assert_eq!(points, vec![("", 12.0), ("North", 30.0)]);
}
