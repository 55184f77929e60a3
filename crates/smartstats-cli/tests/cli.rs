// File: crates/smartstats-cli/tests/cli.rs
// Purpose: Argument parsing for every subcommand.

use clap::Parser;

use smartstats_cli::{Cli, Command, Format};

#[test]
fn chart_defaults() {
    let cli = Cli::try_parse_from(["smartstats", "chart", "data.csv"]).unwrap();
    let Command::Chart(args) = cli.command else { panic!("expected chart") };
    assert_eq!(args.input, "data.csv");
    assert_eq!(args.chart_type, "bar");
    assert_eq!(args.formats, vec![Format::Svg, Format::Png]);
    assert!(args.title.is_none());
    assert!(args.out.is_none());
}

#[test]
fn chart_formats_are_comma_separated() {
    let cli = Cli::try_parse_from(["smartstats", "chart", "-", "--type", "pie", "--formats", "json,csv,txt"]).unwrap();
    let Command::Chart(args) = cli.command else { panic!("expected chart") };
    assert_eq!(args.chart_type, "pie");
    assert_eq!(args.formats, vec![Format::Json, Format::Csv, Format::Txt]);
}

#[test]
fn unknown_chart_type_is_rejected() {
    assert!(Cli::try_parse_from(["smartstats", "chart", "d.csv", "--type", "radar"]).is_err());
}

#[test]
fn materialize_collection_conflicts_with_cancel() {
    assert!(Cli::try_parse_from(["smartstats", "materialize", "--collection", "q1", "--cancel"]).is_err());
    let cli = Cli::try_parse_from(["smartstats", "materialize", "--cancel"]).unwrap();
    let Command::Materialize(args) = cli.command else { panic!("expected materialize") };
    assert!(args.cancel);
    assert!(args.collection.is_none());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["smartstats", "analyze", "d.csv", "--json", "-v"]).unwrap();
    assert!(cli.verbose);
    let Command::Analyze(args) = cli.command else { panic!("expected analyze") };
    assert!(args.json);
}

#[test]
fn suggest_accepts_prompt_only() {
    let cli = Cli::try_parse_from(["smartstats", "suggest", "--prompt", "sales by region"]).unwrap();
    let Command::Suggest(args) = cli.command else { panic!("expected suggest") };
    assert!(args.input.is_none());
    assert_eq!(args.prompt.as_deref(), Some("sales by region"));
}
