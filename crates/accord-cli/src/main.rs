//! Accord CLI — lints Python functions whose names and bodies disagree.
//!
//! # Commands
//!
//! - `accord analyze [PATHS…]`: walk Python files, score every function,
//!   render per-file reports and a run summary
//! - `accord vocab`: dump the effective vocabulary table
//!
//! Exit codes: 0 = clean, 1 = findings at/above `--fail-on`, 2 = fatal
//! error (bad config, conflicting vocabulary, grammar failure).

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use accord_core::AccordErrorCode;

mod commands;
mod error;
mod render;

/// Semantic name/implementation harmony linter for Python.
#[derive(Parser)]
#[command(name = "accord")]
#[command(version)]
#[command(about = "Flags Python functions whose name and implementation diverge semantically")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze Python files or directories
    Analyze(commands::analyze::AnalyzeArgs),
    /// Print the effective vocabulary table
    Vocab(commands::vocab::VocabArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    accord_core::telemetry::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Vocab(args) => commands::vocab::run(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(code = err.error_code(), "{err}");
            eprintln!("accord: {err}");
            ExitCode::from(2)
        }
    }
}
