// File: crates/smartstats-cli/src/lib.rs
// Summary: Command-line front end library: argument model, configuration, logging, HTTP client and commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod http;
pub mod logging;

pub use cli::{Cli, Command, Format};
pub use config::AppConfig;
