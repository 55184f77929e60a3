// File: crates/smartstats-cli/src/config.rs
// Summary: Layered application settings: defaults, optional TOML file, then SMARTSTATS_* environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use smartstats_core::{theme, PieLabelStyle, RenderOptions};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "smartstats.toml";
pub const ENV_PREFIX: &str = "SMARTSTATS";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Bearer token sent with each request, if the service wants one.
    pub token: Option<String>,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/api/generate-chart".to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

impl SuggestionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub theme: String,
    pub interactive: SurfaceSize,
    pub export: SurfaceSize,
    pub table_row_height: f32,
    pub pie_labels: PieLabelStyle,
    pub suggestion: SuggestionConfig,
    pub handoff_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let interactive = RenderOptions::interactive();
        let export = RenderOptions::export();
        Self {
            output_dir: PathBuf::from("out"),
            theme: "dark".to_string(),
            interactive: SurfaceSize { width: interactive.width, height: interactive.height },
            export: SurfaceSize { width: export.width, height: export.height },
            table_row_height: interactive.table_row_height,
            pie_labels: PieLabelStyle::default(),
            suggestion: SuggestionConfig::default(),
            handoff_dir: PathBuf::from(".smartstats/handoff"),
        }
    }
}

impl AppConfig {
    /// Load settings. An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
    }

    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };
        let cfg = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("failed to read configuration")?
            .try_deserialize::<AppConfig>()
            .context("invalid configuration")?;
        Ok(cfg)
    }

    pub fn interactive_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::interactive()
            .with_size(self.interactive.width, self.interactive.height)
            .with_theme(theme::find(&self.theme));
        opts.table_row_height = self.table_row_height.max(1.0);
        opts.pie_labels = self.pie_labels;
        opts
    }

    /// Export options; the table row height grows with the export font.
    pub fn export_options(&self) -> RenderOptions {
        let base = RenderOptions::interactive();
        let mut opts = RenderOptions::export()
            .with_size(self.export.width, self.export.height)
            .with_theme(theme::find(&self.theme));
        opts.table_row_height = self.table_row_height.max(1.0) * opts.font_size / base.font_size;
        opts.pie_labels = self.pie_labels;
        opts
    }
}
