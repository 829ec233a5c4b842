//! `accord analyze` — walk, parse, score, render.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use rayon::prelude::*;

use accord_analysis::coords::EmbedCache;
use accord_analysis::engine::HarmonyPipeline;
use accord_analysis::parser::PythonParser;
use accord_analysis::report::{FileReport, RunSummary};
use accord_core::config::ScanConfig;
use accord_core::Severity;

use crate::error::CliError;
use crate::render;

use super::{effective_vocabulary, load_config};

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::from_name(s).ok_or_else(|| {
        format!(
            "unknown severity `{s}` (expected one of: {})",
            Severity::all()
                .iter()
                .map(|sev| sev.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 if any function is at or above this severity
    #[arg(long, value_parser = parse_severity)]
    pub fail_on: Option<Severity>,

    /// Config file path (default: ./accord.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Analysis threads (overrides config; 0 = auto)
    #[arg(long)]
    pub threads: Option<usize>,
}

pub fn run(args: AnalyzeArgs) -> Result<ExitCode, CliError> {
    let config = load_config(args.config.as_deref())?;
    let thresholds = config.effective_thresholds()?;
    let vocabulary = Arc::new(effective_vocabulary(&config)?);

    // Fail on grammar problems up front, not per worker.
    PythonParser::new()?;

    let files = collect_files(&args.paths, &config.scan);
    tracing::info!(files = files.len(), "starting analysis");

    let threads = args.threads.unwrap_or_else(|| config.scan.effective_threads());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    // One embed cache for the whole run: keys are content-addressed bag
    // hashes, so workers on different files share hits freely.
    let cache = EmbedCache::default();
    let outcomes: Vec<Result<FileReport, PathBuf>> = pool.install(|| {
        files
            .par_iter()
            .map_init(
                || {
                    HarmonyPipeline::with_cache(
                        vocabulary.clone(),
                        thresholds,
                        cache.clone(),
                    )
                    .expect("python grammar already validated")
                },
                |pipeline, path| {
                    let path_display = path.display().to_string();
                    let source = match read_source(path) {
                        Some(source) => source,
                        None => return Err(path.clone()),
                    };
                    match pipeline.analyze_source(&source, &path_display) {
                        Ok(report) => Ok(report),
                        Err(err) => {
                            tracing::warn!(file = %path_display, error = %err, "skipping file");
                            Err(path.clone())
                        }
                    }
                },
            )
            .collect()
    });

    let mut reports = Vec::new();
    let mut run = RunSummary::default();
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(_) => run.record_failure(),
        }
    }
    reports.sort_by(|a, b| a.file.cmp(&b.file));
    for report in &reports {
        run.fold(report);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        render::render_json(&reports, &run, &mut out)?;
    } else {
        render::render_text(&reports, &run, &mut out)?;
    }

    let failed = args
        .fail_on
        .is_some_and(|min| reports.iter().any(|r| r.flagged(min).next().is_some()));
    Ok(if failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn read_source(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(source) => Some(source),
            Err(_) => {
                tracing::warn!(file = %path.display(), "not valid UTF-8, skipping");
                None
            }
        },
        Err(err) => {
            tracing::warn!(file = %path.display(), error = %err, "unreadable, skipping");
            None
        }
    }
}

/// Collect Python files under the given paths, honoring .gitignore and the
/// configured extra ignore patterns and size cap.
fn collect_files(paths: &[PathBuf], scan: &ScanConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let max_size = scan.effective_max_file_size();

    for root in paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }

        let mut builder = WalkBuilder::new(root);
        builder.follow_links(scan.effective_follow_symlinks());

        if !scan.extra_ignore.is_empty() {
            let mut overrides = OverrideBuilder::new(root);
            for pattern in &scan.extra_ignore {
                // Leading `!` marks an ignore pattern in override syntax.
                if overrides.add(&format!("!{pattern}")).is_err() {
                    tracing::warn!(pattern, "invalid ignore pattern, skipping");
                }
            }
            if let Ok(built) = overrides.build() {
                builder.overrides(built);
            }
        }

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "walk error");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("py") {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if meta.len() > max_size {
                    tracing::debug!(file = %path.display(), "over size cap, skipping");
                    continue;
                }
            }
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}
