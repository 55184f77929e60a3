// File: crates/smartstats-cli/tests/commands.rs
// Purpose: End-to-end command runs against temporary directories.

use std::path::Path;

use async_trait::async_trait;
use serde_json::json;

use smartstats_cli::cli::{AnalyzeArgs, ChartArgs, MaterializeArgs, SuggestArgs};
use smartstats_cli::commands::{analyze, chart, materialize, suggest};
use smartstats_cli::{AppConfig, Format};
use smartstats_core::{
    FileStore, HandoffPayload, HandoffSlot, Suggestion, SuggestionError, SuggestionRequest, SuggestionResponse,
    SuggestionService,
};

const SALES: &str = "region,revenue\nNorth,120\nSouth,80\nEast,45\n";

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        output_dir: dir.join("out"),
        handoff_dir: dir.join("handoff"),
        ..AppConfig::default()
    }
}

fn suggestion() -> Suggestion {
    serde_json::from_value(json!({
        "title": "Revenue by Region",
        "chart_type": "pie",
        "data": [{"name": "North", "value": 120}, {"name": "South", "value": 80}],
        "config": {}
    }))
    .unwrap()
}

#[test]
fn analyze_prints_report_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    std::fs::write(&input, SALES).unwrap();

    let mut out = Vec::new();
    analyze::run(&AnalyzeArgs { input: input.display().to_string(), json: false }, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("SMARTSTATS DATA ANALYSIS REPORT"));
    assert!(text.contains("revenue"));

    let mut out = Vec::new();
    analyze::run(&AnalyzeArgs { input: input.display().to_string(), json: true }, &mut out).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["rows"], 3);
    assert_eq!(v["numericColumns"], json!(["revenue"]));
    assert_eq!(v["categoricalColumns"], json!(["region"]));
}

#[test]
fn chart_writes_each_requested_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    std::fs::write(&input, SALES).unwrap();
    let cfg = config_in(dir.path());

    let args = ChartArgs {
        input: input.display().to_string(),
        chart_type: "bar".to_string(),
        title: None,
        formats: vec![Format::Svg, Format::Json, Format::Csv, Format::Txt],
        out: None,
    };
    let mut out = Vec::new();
    let written = chart::run(&cfg, &args, &mut out).unwrap();
    assert_eq!(written.len(), 4);

    let out_dir = dir.path().join("out");
    let svg = std::fs::read_to_string(out_dir.join("sales.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("North"));

    let spec: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(out_dir.join("sales.json")).unwrap()).unwrap();
    assert_eq!(spec["title"], "sales");
    assert_eq!(spec["type"], "bar");
    assert!(spec["createdAt"].as_str().unwrap().ends_with('Z'));

    let csv = std::fs::read_to_string(out_dir.join("sales.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);

    assert!(out_dir.join("sales.txt").exists());
    let leftovers: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn chart_title_and_out_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    std::fs::write(&input, SALES).unwrap();
    let cfg = config_in(dir.path());
    let target = dir.path().join("custom");

    let args = ChartArgs {
        input: input.display().to_string(),
        chart_type: "pie".to_string(),
        title: Some("Q1 Revenue!".to_string()),
        formats: vec![Format::Svg],
        out: Some(target.clone()),
    };
    chart::run(&cfg, &args, &mut Vec::new()).unwrap();
    assert!(target.join("q1revenue.svg").exists());
    assert!(!dir.path().join("out").exists());
}

struct Canned;

#[async_trait]
impl SuggestionService for Canned {
    async fn suggest(&self, _request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError> {
        Ok(SuggestionResponse::Wrapped { success: Some(true), stats: Some(json!({"rows": 99})), suggestion: suggestion() })
    }
}

#[tokio::test]
async fn suggest_fills_the_handoff_slot() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    std::fs::write(&input, SALES).unwrap();
    let cfg = config_in(dir.path());

    let args = SuggestArgs { input: Some(input.display().to_string()), prompt: Some("share by region".to_string()) };
    let mut out = Vec::new();
    suggest::run(&cfg, &args, &Canned, &mut out).await.unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Revenue by Region"));

    let slot = HandoffSlot::new(FileStore::new(&cfg.handoff_dir));
    let payload = slot.peek().unwrap().unwrap();
    assert_eq!(payload.prompt_text, "share by region");
    assert_eq!(payload.suggestion.title, "Revenue by Region");
    // Local profile wins over the service's stats.
    assert_eq!(payload.analysis.unwrap()["rows"], 3);
}

#[tokio::test]
async fn suggest_rejects_an_empty_request() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let args = SuggestArgs { input: None, prompt: Some("   ".to_string()) };
    assert!(suggest::run(&cfg, &args, &Canned, &mut Vec::new()).await.is_err());
    assert!(HandoffSlot::new(FileStore::new(&cfg.handoff_dir)).peek().unwrap().is_none());
}

#[test]
fn materialize_shows_then_creates() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let slot = HandoffSlot::new(FileStore::new(&cfg.handoff_dir));
    slot.write(&HandoffPayload::new(suggestion(), None, "", "share")).unwrap();

    let mut out = Vec::new();
    let shown = materialize::run(&cfg, &MaterializeArgs { collection: None, cancel: false }, &mut out).unwrap();
    assert!(shown.is_none());
    assert!(String::from_utf8(out).unwrap().contains("Revenue by Region"));
    assert!(slot.peek().unwrap().is_some());

    let args = MaterializeArgs { collection: Some("Q1 Reports".to_string()), cancel: false };
    let path = materialize::run(&cfg, &args, &mut Vec::new()).unwrap().unwrap();
    assert_eq!(path, dir.path().join("out/collections/q1reports/revenuebyregion.json"));
    assert!(path.with_extension("svg").exists());
    assert!(slot.peek().unwrap().is_none());

    let mut out = Vec::new();
    materialize::run(&cfg, &MaterializeArgs { collection: None, cancel: false }, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("No pending chart suggestion."));
}

#[test]
fn materialize_cancel_clears_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let slot = HandoffSlot::new(FileStore::new(&cfg.handoff_dir));
    slot.write(&HandoffPayload::new(suggestion(), None, "", "")).unwrap();

    materialize::run(&cfg, &MaterializeArgs { collection: None, cancel: true }, &mut Vec::new()).unwrap();
    assert!(slot.peek().unwrap().is_none());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn collections_are_listed_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("collections");
    for name in ["zeta", "alpha"] {
        std::fs::create_dir_all(root.join(name)).unwrap();
    }
    assert_eq!(materialize::list_collections(&root), vec!["alpha", "zeta"]);
    assert_eq!(materialize::collection_dir_name("  Q1 Reports "), "q1reports");
    assert_eq!(materialize::collection_dir_name("!!"), "default");
}
