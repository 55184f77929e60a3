// File: crates/smartstats-core/src/export/json.rs
// Summary: JSON export of a chart: {title, type, data, config, createdAt}.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::chart::ChartSpec;
use crate::error::ExportError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartDocument<'a> {
    #[serde(flatten)]
    chart: &'a ChartSpec,
    created_at: String,
}

/// Pretty-printed JSON document of `spec`, rows as sanitized.
pub fn chart_json(spec: &ChartSpec, created_at: DateTime<Utc>) -> Result<String, ExportError> {
    let doc = ChartDocument { chart: spec, created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true) };
    Ok(serde_json::to_string_pretty(&doc)?)
}
