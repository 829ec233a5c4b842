//! Report assembly: per-file and per-run aggregation.
//!
//! Pure aggregation — nothing here recomputes a coordinate or a distance.
//! The shapes are serializable; rendering them (text, JSON) is the front
//! end's job.

use serde::Serialize;

use accord_core::{Coordinate, Severity};

/// One analyzed function. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionRecord {
    pub qualified_name: String,
    pub line: u32,
    pub intent: Coordinate,
    pub execution: Coordinate,
    /// Raw Euclidean distance. Meaningless (0.0 by convention) when
    /// `severity` is `Unknown` — branch on severity before reading this.
    pub distance: f64,
    pub severity: Severity,
}

impl FunctionRecord {
    /// A fully scored record.
    pub fn scored(
        qualified_name: String,
        line: u32,
        intent: Coordinate,
        execution: Coordinate,
        distance: f64,
        severity: Severity,
    ) -> Self {
        Self {
            qualified_name,
            line,
            intent,
            execution,
            distance,
            severity,
        }
    }

    /// An insufficient-signal record. The sentinel coordinates are kept so
    /// renderers can show which side failed to embed.
    pub fn unscored(
        qualified_name: String,
        line: u32,
        intent: Coordinate,
        execution: Coordinate,
    ) -> Self {
        Self {
            qualified_name,
            line,
            intent,
            execution,
            distance: 0.0,
            severity: Severity::Unknown,
        }
    }
}

/// Counts per severity band. `unknown` is its own bucket, never folded
/// into the scored bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeveritySummary {
    pub harmonious: u32,
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
    pub unknown: u32,
}

impl SeveritySummary {
    /// Count one record.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Harmonious => self.harmonious += 1,
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Critical => self.critical += 1,
            Severity::Unknown => self.unknown += 1,
        }
    }

    /// Count for one band.
    pub fn count(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Harmonious => self.harmonious,
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
            Severity::Unknown => self.unknown,
        }
    }

    /// Total records counted.
    pub fn total(&self) -> u32 {
        Severity::all().iter().map(|&s| self.count(s)).sum()
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: &SeveritySummary) {
        self.harmonious += other.harmonious;
        self.low += other.low;
        self.medium += other.medium;
        self.high += other.high;
        self.critical += other.critical;
        self.unknown += other.unknown;
    }
}

/// All records for one file, ordered for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub total_functions: u32,
    pub summary: SeveritySummary,
    /// Scored records first, descending by raw distance; ties and unscored
    /// records keep source order (stable sort).
    pub records: Vec<FunctionRecord>,
    pub analysis_time_us: u64,
}

impl FileReport {
    /// Assemble a report from records in source order.
    pub fn assemble(file: String, mut records: Vec<FunctionRecord>, analysis_time_us: u64) -> Self {
        let mut summary = SeveritySummary::default();
        for record in &records {
            summary.record(record.severity);
        }

        records.sort_by(|a, b| {
            match (a.severity.is_scored(), b.severity.is_scored()) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => b
                    .distance
                    .partial_cmp(&a.distance)
                    .unwrap_or(std::cmp::Ordering::Equal),
            }
        });

        Self {
            file,
            total_functions: records.len() as u32,
            summary,
            records,
            analysis_time_us,
        }
    }

    /// Records at or above a severity, by rank.
    pub fn flagged(&self, min: Severity) -> impl Iterator<Item = &FunctionRecord> {
        self.records
            .iter()
            .filter(move |r| r.severity.rank() >= min.rank())
    }

    /// The most dissonant scored record, if any.
    pub fn worst(&self) -> Option<&FunctionRecord> {
        self.records.iter().find(|r| r.severity.is_scored())
    }
}

/// Run-level aggregation over many file reports.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    pub files_analyzed: u32,
    pub files_failed: u32,
    pub total_functions: u32,
    pub summary: SeveritySummary,
}

impl RunSummary {
    /// Fold one file report in.
    pub fn fold(&mut self, report: &FileReport) {
        self.files_analyzed += 1;
        self.total_functions += report.total_functions;
        self.summary.merge(&report.summary);
    }

    /// Count a file that could not be parsed.
    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }
}
