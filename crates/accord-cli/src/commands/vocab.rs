//! `accord vocab` — dump the effective vocabulary table.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use accord_core::Axis;

use crate::error::CliError;

use super::{effective_vocabulary, load_config};

#[derive(Args)]
pub struct VocabArgs {
    /// Emit the table as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file path (default: ./accord.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct VocabEntry<'a> {
    token: &'a str,
    axis: Axis,
}

pub fn run(args: VocabArgs) -> Result<ExitCode, CliError> {
    let config = load_config(args.config.as_deref())?;
    let vocabulary = effective_vocabulary(&config)?;
    let entries = vocabulary.entries();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let rows: Vec<VocabEntry<'_>> = entries
            .iter()
            .map(|&(token, axis)| VocabEntry { token, axis })
            .collect();
        serde_json::to_writer_pretty(&mut out, &rows)
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        writeln!(out)?;
    } else {
        for (token, axis) in entries {
            writeln!(out, "{token:<16} {axis}")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
