// File: crates/smartstats-cli/tests/config.rs
// Purpose: Settings precedence: defaults, then the TOML file, then SMARTSTATS_* environment.

use std::collections::HashMap;
use std::path::PathBuf;

use smartstats_cli::AppConfig;
use smartstats_core::PieLabelStyle;

fn env(pairs: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    config::Environment::with_prefix("SMARTSTATS")
        .prefix_separator("_")
        .separator("__")
        .source(Some(map))
}

#[test]
fn defaults_without_file_or_env() {
    let cfg = AppConfig::load_with_env(None, env(&[])).unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
    assert_eq!(cfg.theme, "dark");
    assert_eq!(cfg.interactive.width, 480);
    assert_eq!(cfg.export.width, 1024);
    assert_eq!(cfg.suggestion.timeout_secs, 30);
    assert!(cfg.suggestion.token.is_none());
    assert_eq!(cfg.pie_labels, PieLabelStyle::PercentAndName);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("smartstats.toml");
    std::fs::write(
        &path,
        r#"
output_dir = "charts"
theme = "light"
pie_labels = "name-only"

[export]
width = 800
height = 500

[suggestion]
endpoint = "http://example.test/api/generate-chart"
timeout_secs = 5
"#,
    )
    .unwrap();

    let cfg = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("charts"));
    assert_eq!(cfg.theme, "light");
    assert_eq!(cfg.pie_labels, PieLabelStyle::NameOnly);
    assert_eq!((cfg.export.width, cfg.export.height), (800, 500));
    assert_eq!(cfg.interactive.width, 480);
    assert_eq!(cfg.suggestion.endpoint, "http://example.test/api/generate-chart");
    assert_eq!(cfg.suggestion.timeout_secs, 5);

    let opts = cfg.export_options();
    assert_eq!((opts.width, opts.height), (800, 500));
    assert_eq!(opts.pie_labels, PieLabelStyle::NameOnly);
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("smartstats.toml");
    std::fs::write(&path, "output_dir = \"charts\"\n").unwrap();

    let cfg = AppConfig::load_with_env(
        Some(&path),
        env(&[
            ("SMARTSTATS_OUTPUT_DIR", "elsewhere"),
            ("SMARTSTATS_SUGGESTION__ENDPOINT", "http://localhost:9/x"),
        ]),
    )
    .unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("elsewhere"));
    assert_eq!(cfg.suggestion.endpoint, "http://localhost:9/x");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(AppConfig::load_with_env(Some(&missing), env(&[])).is_err());
}

#[test]
fn export_row_height_scales_with_font() {
    let cfg = AppConfig::default();
    let interactive = cfg.interactive_options();
    let export = cfg.export_options();
    assert_eq!(interactive.table_row_height, 24.0);
    assert!(export.table_row_height > interactive.table_row_height);
    assert_eq!(
        export.table_row_height / interactive.table_row_height,
        export.font_size / interactive.font_size
    );
}
