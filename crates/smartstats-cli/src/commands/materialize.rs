// File: crates/smartstats-cli/src/commands/materialize.rs
// Summary: `materialize`: consume the pending suggestion into a chart collection, show it, or cancel it.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;

use smartstats_core::export::{chart_json, export_file_name, write_export};
use smartstats_core::{render_svg, Claim, FileStore, HandoffPayload, HandoffSlot};

use crate::cli::MaterializeArgs;
use crate::config::AppConfig;

/// Directory name for a collection: alphanumerics, `-` and `_`, lowercased.
pub fn collection_dir_name(name: &str) -> String {
    let s: String = name
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .flat_map(char::to_lowercase)
        .collect();
    if s.is_empty() { "default".to_string() } else { s }
}

pub fn collections_root(cfg: &AppConfig) -> PathBuf {
    cfg.output_dir.join("collections")
}

/// Existing collections, sorted by name.
pub fn list_collections(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(root)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

fn build_chart(cfg: &AppConfig, payload: &HandoffPayload, collection: &str) -> Result<PathBuf> {
    let spec = payload.suggestion.to_spec();
    let dir = collections_root(cfg).join(collection_dir_name(collection));
    let json = chart_json(&spec, Utc::now())?;
    let path = write_export(&dir, &export_file_name(&spec.title, "json"), json.as_bytes())?;
    let svg = render_svg(&spec, &cfg.interactive_options());
    write_export(&dir, &export_file_name(&spec.title, "svg"), svg.as_bytes())?;
    Ok(path)
}

/// Returns the created chart file when one was materialized.
pub fn run(cfg: &AppConfig, args: &MaterializeArgs, out: &mut dyn Write) -> Result<Option<PathBuf>> {
    let slot = HandoffSlot::new(FileStore::new(&cfg.handoff_dir));
    let pending = match slot.claim(None)? {
        None => {
            writeln!(out, "No pending chart suggestion.")?;
            return Ok(None);
        }
        Some(Claim::NeedsDestination(p)) => p,
        Some(Claim::Ready { payload, destination }) => {
            let path = build_chart(cfg, &payload, &destination)?;
            writeln!(out, "Created {}", path.display())?;
            return Ok(Some(path));
        }
    };

    if args.cancel {
        pending.cancel()?;
        writeln!(out, "Pending chart discarded.")?;
        return Ok(None);
    }

    match &args.collection {
        Some(collection) => {
            let path = pending.materialize(collection, |payload, dest| build_chart(cfg, payload, dest))?;
            writeln!(out, "Created {}", path.display())?;
            Ok(Some(path))
        }
        None => {
            let s = &pending.payload().suggestion;
            writeln!(out, "Pending {} chart: {}", s.chart_type().badge(), s.title)?;
            let existing = list_collections(&collections_root(cfg));
            if existing.is_empty() {
                writeln!(out, "No collections yet; choose a new name.")?;
            } else {
                writeln!(out, "Collections:")?;
                for name in existing {
                    writeln!(out, "  {name}")?;
                }
            }
            writeln!(out, "Run with --collection <NAME> to create it, or --cancel to discard it.")?;
            Ok(None)
        }
    }
}
