// File: crates/smartstats-core/src/error.rs
// Summary: Error families for ingestion, rendering, export, hand-off and the suggestion service.

use thiserror::Error;

/// Malformed chart-creation input. Recovered locally and shown inline.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Chart title is required")]
    MissingTitle,

    #[error("Invalid JSON in data or config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Chart data must be a JSON array of row objects")]
    DataNotArray,

    #[error("Chart config must be a JSON object")]
    ConfigNotObject,
}

impl InputError {
    /// Message suitable for an inline validation label.
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::MissingTitle => "Chart title is required",
            InputError::InvalidJson(_) => "Invalid JSON in data or config",
            InputError::DataNotArray => "Data must be a list of rows",
            InputError::ConfigNotObject => "Config must be an object",
        }
    }
}

/// Failures while drawing a chart onto a surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The dataset has nothing drawable (no rows, or a pie whose total is zero).
    #[error("No data to render")]
    NoData,

    #[error("failed to create surface: {0}")]
    Surface(String),

    #[error("encode failed: {0}")]
    Encode(String),

    /// The encoder returned without producing bytes.
    #[error("encoded image is empty")]
    EmptyImage,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("image export failed: {0}")]
    Render(#[from] RenderError),
}

#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("hand-off store failure: {0}")]
    Store(String),

    #[error("hand-off payload is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the external suggestion service. Never retried here.
#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("Please provide either CSV data or a prompt")]
    EmptyRequest,

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode service response: {0}")]
    Decode(String),
}

impl SuggestionError {
    /// Generic retryable message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SuggestionError::EmptyRequest => self.to_string(),
            SuggestionError::Status { message, .. } if !message.is_empty() => message.clone(),
            SuggestionError::Status { .. } => "Failed to generate chart".to_string(),
            _ => "Network error. Please try again.".to_string(),
        }
    }
}

/// Any failure produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Handoff(#[from] HandoffError),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}

pub type Result<T> = std::result::Result<T, Error>;
