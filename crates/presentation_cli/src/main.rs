//! cepclima CLI
//!
//! Looks up a Brazilian postal code (CEP) and shows the address with the
//! current weather and daily forecast for its coordinates.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod render;

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use application::LookupWorkflow;
use clap::{Parser, Subcommand};
use domain::WorkflowState;
use infrastructure::{AppConfig, build_workflow, init_logging};
use render::OutputFormat;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// cepclima CLI
#[derive(Parser)]
#[command(name = "cepclima")]
#[command(author, version, about = "CEP lookup with local weather", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, env = "CEPCLIMA_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single CEP
    ///
    /// Example: cepclima lookup 01001-000
    Lookup {
        /// Postal code, with or without separators
        cep: String,
    },

    /// Prompt for CEPs until an empty line or "quit"
    Interactive,
}

/// Determine log filter override from verbosity count
///
/// Without `-v` the configured filter applies.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn is_exit_command(line: &str) -> bool {
    line.is_empty() || matches!(line.to_lowercase().as_str(), "quit" | "exit" | "sair")
}

/// Print in-flight phases to stderr until the sender goes away or the task is aborted
fn spawn_progress(mut rx: watch::Receiver<WorkflowState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let phase = rx.borrow_and_update().phase;
            if let Some(line) = render::progress_line(phase) {
                eprintln!("{line}");
            }
        }
    })
}

/// Run one submission and print its result; returns whether it succeeded
async fn submit_and_print(
    workflow: &LookupWorkflow,
    raw: &str,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let progress = (format == OutputFormat::Text).then(|| spawn_progress(workflow.subscribe()));

    debug!(input = %raw, "Submitting");
    let result = workflow.submit(raw).await;

    if let Some(handle) = progress {
        handle.abort();
    }

    let state = match &result {
        Ok(state) => state.clone(),
        Err(_) => workflow.state(),
    };
    println!("{}", render::render(&state, format)?);

    Ok(result.is_ok())
}

async fn run_interactive(workflow: &LookupWorkflow, format: OutputFormat) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("CEP> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if is_exit_command(line) {
            break;
        }

        submit_and_print(workflow, line, format).await?;
        println!();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    let workflow = build_workflow(&config)?;

    match cli.command {
        Commands::Lookup { cep } => {
            if !submit_and_print(&workflow, &cep, cli.format).await? {
                std::process::exit(1);
            }
        },
        Commands::Interactive => run_interactive(&workflow, cli.format).await?,
    }

    Ok(())
}
