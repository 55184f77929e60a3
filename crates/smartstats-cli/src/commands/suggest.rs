// File: crates/smartstats-cli/src/commands/suggest.rs
// Summary: `suggest`: ask the suggestion service for a chart and leave it in the hand-off slot.

use std::io::Write;

use anyhow::{anyhow, Result};
use tracing::info;

use smartstats_core::{
    parse_table, profile_table, resolve_stats, FileStore, HandoffPayload, HandoffSlot, SuggestionRequest,
    SuggestionService,
};

use crate::cli::SuggestArgs;
use crate::config::AppConfig;
use super::read_input;

pub async fn run(cfg: &AppConfig, args: &SuggestArgs, service: &dyn SuggestionService, out: &mut dyn Write) -> Result<()> {
    let raw = match &args.input {
        Some(src) => read_input(src)?,
        None => String::new(),
    };
    let prompt = args.prompt.clone().unwrap_or_default();

    let request = SuggestionRequest::new(Some(&prompt), Some(&raw)).map_err(|e| anyhow!(e.user_message()))?;
    let response = service.suggest(&request).await.map_err(|e| {
        tracing::error!(error = %e, "suggestion request failed");
        anyhow!(e.user_message())
    })?;
    let (suggestion, external) = response.into_parts();

    let local = request.raw_input.as_deref().map(|r| profile_table(&parse_table(r)));
    let analysis = resolve_stats(local.as_ref(), external);

    writeln!(out, "Suggested {} chart: {}", suggestion.chart_type().badge(), suggestion.title)?;
    if let Some(cols) = &suggestion.columns {
        writeln!(out, "Columns: {}", cols.join(", "))?;
    }
    writeln!(out, "Data points: {}", suggestion.data.len())?;

    let slot = HandoffSlot::new(FileStore::new(&cfg.handoff_dir));
    slot.write(&HandoffPayload::new(suggestion, analysis, &raw, &prompt))?;
    info!(dir = %cfg.handoff_dir.display(), "suggestion handed off");
    writeln!(out, "Run `smartstats materialize --collection <NAME>` to create it.")?;
    Ok(())
}
