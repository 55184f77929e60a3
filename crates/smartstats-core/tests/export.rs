// File: crates/smartstats-core/tests/export.rs
// Purpose: JSON/CSV/report exports and chart draft validation.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use smartstats_core::export::{chart_json, export_file_name, records_csv, table_csv, text_report, write_export};
use smartstats_core::{parse_table, profile_table, ChartDraft, ChartSpec, ChartType, InputError, Record};

fn rows(v: Value) -> Vec<Record> {
    v.as_array().unwrap().iter().map(|r| r.as_object().unwrap().clone()).collect()
}

#[test]
fn csv_round_trips_plain_cells() {
    let text = "name,qty,note\nwidget,3,blue\ngadget,12,red\nthing,,green";
    let table = parse_table(text);
    let out = table_csv(&table).unwrap();
    let back = parse_table(&out);
    assert_eq!(back, table);
}

#[test]
fn csv_round_trips_single_column_with_empty_cell() {
    let table = parse_table("note\nhello\n\"\"\nworld");
    assert_eq!(table.row_count(), 3);
    let out = table_csv(&table).unwrap();
    assert_eq!(out, "note\nhello\n\"\"\nworld\n");
    let back = parse_table(&out);
    assert_eq!(back, table);
    assert_eq!(back.rows()[1].get("note"), "");
}

#[test]
fn csv_uses_union_of_keys() {
    let data = rows(json!([{"a": 1}, {"a": 2, "b": "x"}, {"c": null}]));
    let out = records_csv(&data).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["a,b,c", "1,,", "2,x,", ",,"]);
}

#[test]
fn missing_keys_become_empty_strings() {
    let table = parse_table("name,value,unit\nA,1,kg\nB,2");
    let spec = ChartSpec::from_table("t", ChartType::Table, &table);
    assert_eq!(spec.data[1]["unit"], json!(""));

    let spec = ChartSpec::new("t", ChartType::Bar, &rows(json!([{"name": "A", "value": 1}, {"name": "B"}])), Record::new());
    assert_eq!(spec.data[1]["value"], json!(""));
    assert_eq!(spec.points[1].value, 0.0);
    let csv = records_csv(&spec.data).unwrap();
    assert!(csv.ends_with("B,\n"));
    assert!(chart_json(&spec, Utc::now()).is_ok());
}

#[test]
fn json_export_wraps_chart_fields() {
    let spec = ChartSpec::new(
        "Revenue",
        ChartType::Line,
        &rows(json!([{"month": "Jan", "amount": 3, "memo": null}])),
        json!({"pieLabels": "name"}).as_object().unwrap().clone(),
    );
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let doc: Value = serde_json::from_str(&chart_json(&spec, at).unwrap()).unwrap();
    let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["title", "type", "data", "config", "createdAt"]);
    assert_eq!(doc["type"], "line");
    assert_eq!(doc["data"][0]["memo"], "");
    assert_eq!(doc["createdAt"], "2024-01-02T03:04:05.000Z");
}

#[test]
fn report_has_sections_for_each_kind() {
    let profile = profile_table(&parse_table("region,sales\nN,10\nS,20\nN,30"));
    let report = text_report(&profile, Utc::now());
    let numeric_at = report.find("NUMERIC COLUMNS").unwrap();
    let categorical_at = report.find("CATEGORICAL COLUMNS").unwrap();
    assert!(numeric_at < categorical_at);
    assert!(report.contains("[sales]"));
    assert!(report.contains("Mean:      20.0000"));
    assert!(report.contains("[region]"));
    assert!(report.contains("N (2 occurrences)"));
}

#[test]
fn export_names_and_writes() {
    assert_eq!(export_file_name("Monthly Sales (2024)", "png"), "monthlysales2024.png");
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path(), "a.csv", b"x,y\n").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"x,y\n");
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn draft_validation() {
    let ok = ChartDraft { title: "Sample chart".into(), ..ChartDraft::default() }.validate().unwrap();
    assert_eq!(ok.chart_type, ChartType::Bar);
    assert_eq!(ok.points[0].name, "Sample");
    assert_eq!(ok.points[0].value, 100.0);

    let missing = ChartDraft::default().validate().unwrap_err();
    assert!(matches!(missing, InputError::MissingTitle));

    let bad = ChartDraft { title: "x".into(), data: "[{".into(), ..ChartDraft::default() }.validate().unwrap_err();
    assert!(matches!(bad, InputError::InvalidJson(_)));
    assert_eq!(bad.user_message(), "Invalid JSON in data or config");

    let obj = ChartDraft { title: "x".into(), data: "{}".into(), ..ChartDraft::default() }.validate().unwrap_err();
    assert!(matches!(obj, InputError::DataNotArray));

    let cfg = ChartDraft { title: "x".into(), config: "[]".into(), ..ChartDraft::default() }.validate().unwrap_err();
    assert!(matches!(cfg, InputError::ConfigNotObject));

    let t = ChartDraft { title: "x".into(), chart_type: "Donut".into(), ..ChartDraft::default() }.validate().unwrap();
    assert_eq!(t.chart_type, ChartType::Table);
}
