//! Report renderers. The engine defines the shapes; this module decides the
//! presentation only.

use std::io::Write;

use serde::Serialize;

use accord_analysis::report::{FileReport, FunctionRecord, RunSummary};
use accord_core::Severity;

/// Plain-text rendering: one block per file with findings, then a run
/// summary line. Harmonious functions stay silent — a linter reports what
/// needs attention.
pub fn render_text(
    reports: &[FileReport],
    run: &RunSummary,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for report in reports {
        let findings: Vec<&FunctionRecord> = report
            .records
            .iter()
            .filter(|r| r.severity != Severity::Harmonious)
            .collect();
        if findings.is_empty() {
            continue;
        }

        writeln!(
            out,
            "{} — {} functions ({} µs)",
            report.file, report.total_functions, report.analysis_time_us
        )?;
        for record in findings {
            writeln!(out, "  {}", describe(record))?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{} files analyzed, {} skipped · {} functions · {}",
        run.files_analyzed,
        run.files_failed,
        run.total_functions,
        summarize_bands(run)
    )
}

fn describe(record: &FunctionRecord) -> String {
    match record.severity {
        Severity::Unknown => {
            let side = if record.intent.is_zero() {
                "name"
            } else {
                "body"
            };
            format!(
                "unknown    {}:{}  no recognized {side} tokens",
                record.qualified_name, record.line
            )
        }
        severity => {
            let axes = match (record.intent.dominant_axis(), record.execution.dominant_axis()) {
                (Some(intent), Some(execution)) => format!("  {intent} → {execution}"),
                _ => String::new(),
            };
            format!(
                "{:<9}  {}:{}  distance {:.3}{}",
                severity.name(),
                record.qualified_name,
                record.line,
                record.distance,
                axes
            )
        }
    }
}

fn summarize_bands(run: &RunSummary) -> String {
    Severity::all()
        .iter()
        .map(|&s| format!("{} {}", run.summary.count(s), s.name()))
        .collect::<Vec<_>>()
        .join(" · ")
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: &'a [FileReport],
    run: &'a RunSummary,
}

/// JSON rendering of the full report set.
pub fn render_json(
    reports: &[FileReport],
    run: &RunSummary,
    out: &mut impl Write,
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonOutput { files: reports, run })
        .map_err(std::io::Error::other)?;
    writeln!(out)
}
