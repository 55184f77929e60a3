// File: crates/smartstats-cli/src/commands/mod.rs
// Summary: Subcommand implementations and shared input helpers.

pub mod analyze;
pub mod chart;
pub mod materialize;
pub mod suggest;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole input: a file path, or `-` for stdin.
pub fn read_input(src: &str) -> Result<String> {
    if src == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(src).with_context(|| format!("failed to read '{src}'"))
}

/// Title used when none is given: the input file stem, or "chart" for stdin.
pub fn default_title(src: &str) -> String {
    if src == "-" {
        return "chart".to_string();
    }
    Path::new(src)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "chart".to_string())
}
