// File: crates/smartstats-cli/src/main.rs
// Summary: `smartstats` binary: parse arguments, load settings, dispatch a subcommand.

use anyhow::Result;
use clap::Parser;

use smartstats_cli::commands::{analyze, chart, materialize, suggest};
use smartstats_cli::http::HttpSuggestionService;
use smartstats_cli::{logging, AppConfig, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    let cfg = AppConfig::load(cli.config.as_deref())?;
    tracing::debug!(?cfg, "settings loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Analyze(args) => analyze::run(args, &mut out)?,
        Command::Chart(args) => {
            chart::run(&cfg, args, &mut out)?;
        }
        Command::Suggest(args) => {
            let service = HttpSuggestionService::new(&cfg.suggestion).map_err(|e| anyhow::anyhow!(e.user_message()))?;
            suggest::run(&cfg, args, &service, &mut out).await?;
        }
        Command::Materialize(args) => {
            materialize::run(&cfg, args, &mut out)?;
        }
    }
    Ok(())
}
