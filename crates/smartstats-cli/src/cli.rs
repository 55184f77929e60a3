// File: crates/smartstats-cli/src/cli.rs
// Summary: clap argument model for the `smartstats` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "smartstats", version, about = "Profile tabular data and turn it into charts")]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./smartstats.toml when present.
    #[arg(long, global = true, env = "SMARTSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG still wins).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Profile a table and print the statistics report.
    Analyze(AnalyzeArgs),
    /// Draw a chart from a table and export it.
    Chart(ChartArgs),
    /// Ask the suggestion service for a chart and leave it for `materialize`.
    Suggest(SuggestArgs),
    /// Turn the pending suggestion into a chart inside a collection.
    Materialize(MaterializeArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input file, or `-` for stdin.
    pub input: String,
    /// Print the profile as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Input file, or `-` for stdin.
    pub input: String,
    #[arg(long = "type", value_parser = ["bar", "line", "pie", "scatter", "table"], default_value = "bar")]
    pub chart_type: String,
    /// Chart title; defaults to the input file name.
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, value_enum, value_delimiter = ',', default_value = "svg,png")]
    pub formats: Vec<Format>,
    /// Output directory; overrides `output_dir` from the settings.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Input file, or `-` for stdin. Optional when a prompt is given.
    pub input: Option<String>,
    #[arg(long)]
    pub prompt: Option<String>,
}

#[derive(Debug, Args)]
pub struct MaterializeArgs {
    /// Collection to create the chart in. Without it the pending chart is only shown.
    #[arg(long, conflicts_with = "cancel")]
    pub collection: Option<String>,
    /// Drop the pending suggestion.
    #[arg(long)]
    pub cancel: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Png,
    Json,
    Csv,
    Txt,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Txt => "txt",
        }
    }
}
