//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "cepclima")]
#[command(author, version, about = "CEP lookup with local weather", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Lookup { cep: String },
    Interactive,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_lookup_command() {
    let cli = parse_args(&["cepclima", "lookup", "01001-000"]).unwrap();
    if let Commands::Lookup { cep } = cli.command {
        assert_eq!(cep, "01001-000");
    } else {
        panic!("Expected Lookup command");
    }
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parses_interactive_command() {
    let cli = parse_args(&["cepclima", "interactive"]).unwrap();
    assert!(matches!(cli.command, Commands::Interactive));
}

#[test]
fn cli_parses_json_format() {
    let cli = parse_args(&["cepclima", "--format", "json", "lookup", "01001000"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn cli_accepts_global_flags_after_subcommand() {
    let cli = parse_args(&["cepclima", "lookup", "01001000", "-f", "json", "-vv"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_parses_config_path() {
    let cli = parse_args(&["cepclima", "-c", "/etc/cepclima.toml", "interactive"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/cepclima.toml")));
}

#[test]
fn cli_verbose_counting() {
    let cli = parse_args(&["cepclima", "-vvv", "interactive"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(parse_args(&["cepclima", "--format", "xml", "lookup", "01001000"]).is_err());
}

#[test]
fn cli_requires_cep_for_lookup() {
    assert!(parse_args(&["cepclima", "lookup"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["cepclima"]).is_err());
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["cepclima", "forecast"]).is_err());
}
