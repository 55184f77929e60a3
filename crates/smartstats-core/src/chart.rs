// File: crates/smartstats-core/src/chart.rs
// Summary: ChartSpec (what a card draws), render options, and the chart-creation draft form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::InputError;
use crate::normalize::{normalize_records, sanitize_records};
use crate::table::{RawTable, Record};
use crate::theme::Theme;
use crate::types::{ChartType, Insets, NormalizedPoint, CARD_HEIGHT, CARD_WIDTH, EXPORT_HEIGHT, EXPORT_WIDTH};

/// How pie slices are labelled and which share hides a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieLabelStyle {
    /// "Name 12.5%" inside the slice; hidden below 5% of the total.
    #[default]
    PercentAndName,
    /// Name only; hidden below 15% of the full circle.
    NameOnly,
}

impl PieLabelStyle {
    pub fn min_share(&self) -> f64 {
        match self {
            PieLabelStyle::PercentAndName => 0.05,
            PieLabelStyle::NameOnly => 0.15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub font_size: f32,
    pub table_row_height: f32,
    pub pie_labels: PieLabelStyle,
    pub draw_labels: bool,
    pub theme: Theme,
}

impl RenderOptions {
    /// Interactive card surface.
    pub fn interactive() -> Self {
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            insets: Insets::default(),
            font_size: 12.0,
            table_row_height: 24.0,
            pie_labels: PieLabelStyle::default(),
            draw_labels: true,
            theme: Theme::dark(),
        }
    }

    /// Offscreen export surface: larger canvas and font.
    pub fn export() -> Self {
        Self {
            width: EXPORT_WIDTH,
            height: EXPORT_HEIGHT,
            insets: Insets::default().scaled(2.0),
            font_size: 20.0,
            table_row_height: 40.0,
            ..Self::interactive()
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Apply recognised keys of a chart's config map (currently `pieLabels`).
    pub fn with_config(mut self, config: &Record) -> Self {
        match config.get("pieLabels").and_then(Value::as_str) {
            Some("name") => self.pie_labels = PieLabelStyle::NameOnly,
            Some("percent") => self.pie_labels = PieLabelStyle::PercentAndName,
            Some(other) => warn!(value = other, "unknown pieLabels config value; keeping default"),
            None => {}
        }
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self { Self::interactive() }
}

/// Everything one chart card draws. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    /// Sanitized rows: no nulls, every row carries the union of keys.
    pub data: Vec<Record>,
    pub config: Record,
    /// Lossy (name, value) projection used for drawing only.
    #[serde(skip)]
    pub points: Vec<NormalizedPoint>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, chart_type: ChartType, rows: &[Record], config: Record) -> Self {
        let data = sanitize_records(rows);
        let points = normalize_records(&data);
        Self { title: title.into(), chart_type, data, config, points }
    }

    pub fn from_table(title: impl Into<String>, chart_type: ChartType, table: &RawTable) -> Self {
        Self::new(title, chart_type, &table.to_records(), Record::new())
    }

    pub fn point_count(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Options for this chart: `base` plus the chart's own config.
    pub fn render_options(&self, base: RenderOptions) -> RenderOptions {
        base.with_config(&self.config)
    }
}

/// The chart-creation form, holding data and config as JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDraft {
    pub title: String,
    pub chart_type: String,
    pub data: String,
    pub config: String,
}

impl Default for ChartDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            chart_type: "bar".to_string(),
            data: "[\n  {\n    \"name\": \"Sample\",\n    \"value\": 100\n  }\n]".to_string(),
            config: "{}".to_string(),
        }
    }
}

impl ChartDraft {
    /// Check the form and build a spec. Nothing is produced on error.
    pub fn validate(&self) -> Result<ChartSpec, InputError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(InputError::MissingTitle);
        }
        let data: Value = serde_json::from_str(&self.data)?;
        let config: Value = if self.config.trim().is_empty() {
            Value::Object(Record::new())
        } else {
            serde_json::from_str(&self.config)?
        };
        let Value::Array(items) = data else {
            return Err(InputError::DataNotArray);
        };
        let Value::Object(config) = config else {
            return Err(InputError::ConfigNotObject);
        };
        let rows: Vec<Record> = items
            .into_iter()
            .map(|item| match item {
                Value::Object(m) => Ok(m),
                _ => Err(InputError::DataNotArray),
            })
            .collect::<Result<_, _>>()?;
        Ok(ChartSpec::new(title, ChartType::parse(&self.chart_type), &rows, config))
    }
}
