// File: crates/smartstats-core/src/suggestion.rs
// Summary: Contract with the external chart-suggestion service: request, accepted response shapes, service trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::chart::ChartSpec;
use crate::error::SuggestionError;
use crate::profile::DatasetProfile;
use crate::table::Record;
use crate::types::ChartType;

/// Request body. At least one of the two fields carries text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuggestionRequest {
    pub prompt: Option<String>,
    #[serde(rename = "csv_data")]
    pub raw_input: Option<String>,
}

impl SuggestionRequest {
    /// Blank fields become `None`; both blank is rejected before any network call.
    pub fn new(prompt: Option<&str>, raw_input: Option<&str>) -> Result<Self, SuggestionError> {
        let keep = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
        let req = Self { prompt: keep(prompt), raw_input: keep(raw_input) };
        if req.prompt.is_none() && req.raw_input.is_none() {
            return Err(SuggestionError::EmptyRequest);
        }
        Ok(req)
    }
}

/// A suggested chart as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(default)]
    pub title: String,
    #[serde(alias = "chart_type", default = "default_chart_type")]
    pub chart_type: String,
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub config: Record,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

fn default_chart_type() -> String {
    ChartType::Bar.as_str().to_string()
}

impl Suggestion {
    pub fn chart_type(&self) -> ChartType {
        ChartType::parse(&self.chart_type)
    }

    pub fn to_spec(&self) -> ChartSpec {
        ChartSpec::new(self.title.clone(), self.chart_type(), &self.data, self.config.clone())
    }
}

/// Either `{success?, stats?, suggestion}` (raw input was sent) or a bare suggestion (prompt only).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionResponse {
    Wrapped {
        #[serde(default)]
        success: Option<bool>,
        #[serde(default)]
        stats: Option<Value>,
        suggestion: Suggestion,
    },
    Bare(Suggestion),
}

impl SuggestionResponse {
    pub fn into_parts(self) -> (Suggestion, Option<Value>) {
        match self {
            SuggestionResponse::Wrapped { stats, suggestion, .. } => (suggestion, stats),
            SuggestionResponse::Bare(s) => (s, None),
        }
    }
}

/// The external inference service. Called once per request; no retries here.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError>;
}

/// Statistics shown next to a suggestion: the local profile wins over service-supplied stats.
pub fn resolve_stats(local: Option<&DatasetProfile>, external: Option<Value>) -> Option<Value> {
    if let Some(profile) = local.filter(|p| p.rows > 0) {
        match serde_json::to_value(profile) {
            Ok(v) => return Some(v),
            Err(e) => debug!(error = %e, "local profile not serializable; using service stats"),
        }
    }
    external.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_both_response_shapes() {
        let wrapped: SuggestionResponse = serde_json::from_value(json!({
            "success": true,
            "stats": {"rows": 3},
            "suggestion": {"title": "T", "chart_type": "pie", "data": [{"name": "a", "value": 1}], "config": {}}
        }))
        .unwrap();
        let (s, stats) = wrapped.into_parts();
        assert_eq!(s.chart_type(), ChartType::Pie);
        assert_eq!(stats, Some(json!({"rows": 3})));

        let bare: SuggestionResponse =
            serde_json::from_value(json!({"title": "B", "chartType": "line", "columns": ["x", "y"]})).unwrap();
        let (s, stats) = bare.into_parts();
        assert_eq!(s.chart_type(), ChartType::Line);
        assert_eq!(s.columns.as_deref(), Some(&["x".to_string(), "y".to_string()][..]));
        assert!(stats.is_none());
    }

    #[test]
    fn empty_request_is_rejected() {
        assert!(matches!(SuggestionRequest::new(Some("  "), None), Err(SuggestionError::EmptyRequest)));
        let req = SuggestionRequest::new(Some("sales by month"), Some("")).unwrap();
        assert_eq!(req.raw_input, None);
    }

    #[test]
    fn local_stats_take_precedence() {
        let table = crate::parser::parse_table("a,b\n1,x");
        let local = crate::profile::profile_table(&table);
        let chosen = resolve_stats(Some(&local), Some(json!({"external": true}))).unwrap();
        assert_eq!(chosen["rows"], json!(1));
        let fallback = resolve_stats(None, Some(json!({"external": true}))).unwrap();
        assert_eq!(fallback["external"], json!(true));
    }
}
