// File: crates/smartstats-cli/src/logging.rs
// Summary: One-time tracing subscriber setup; RUST_LOG overrides the level chosen on the command line.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber. `verbose` raises the default level to debug.
pub fn init(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
