// File: crates/smartstats-cli/src/http.rs
// Summary: reqwest-backed client for the external chart-suggestion service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use smartstats_core::{SuggestionError, SuggestionRequest, SuggestionResponse, SuggestionService};

use crate::config::SuggestionConfig;

/// Error body the service sends with a failing status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct HttpSuggestionService {
    http: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpSuggestionService {
    pub fn new(cfg: &SuggestionConfig) -> Result<Self, SuggestionError> {
        let http = Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| SuggestionError::Network(e.to_string()))?;
        Ok(Self { http, endpoint: cfg.endpoint.clone(), token: cfg.token.clone() })
    }
}

#[async_trait]
impl SuggestionService for HttpSuggestionService {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, SuggestionError> {
        debug!(endpoint = %self.endpoint, "requesting chart suggestion");
        let mut req = self.http.post(&self.endpoint).json(request);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.map_err(|e| SuggestionError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| SuggestionError::Network(e.to_string()))?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_default();
            warn!(status = status.as_u16(), %message, "suggestion service rejected request");
            return Err(SuggestionError::Status { status: status.as_u16(), message });
        }
        serde_json::from_str(&body).map_err(|e| SuggestionError::Decode(e.to_string()))
    }
}
