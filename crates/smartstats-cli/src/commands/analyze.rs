// File: crates/smartstats-cli/src/commands/analyze.rs
// Summary: `analyze`: ingest a table and print its statistics.

use std::io::Write;

use anyhow::Result;
use chrono::Utc;

use smartstats_core::export::text_report;
use smartstats_core::Analysis;

use crate::cli::AnalyzeArgs;
use super::read_input;

pub fn run(args: &AnalyzeArgs, out: &mut dyn Write) -> Result<()> {
    let raw = read_input(&args.input)?;
    let mut analysis = Analysis::new();
    let profile = analysis.ingest(&raw);
    if profile.rows == 0 {
        tracing::warn!(input = %args.input, "input has no data rows");
    }
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &*profile)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", text_report(&profile, Utc::now()))?;
    }
    Ok(())
}
