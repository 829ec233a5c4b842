//! Report assembly tests: ordering, per-band counts, run aggregation,
//! and the serialized shape.

use accord_analysis::report::{FileReport, FunctionRecord, RunSummary, SeveritySummary};
use accord_core::{Coordinate, Severity};

fn scored(name: &str, line: u32, distance: f64, severity: Severity) -> FunctionRecord {
    FunctionRecord::scored(
        name.to_string(),
        line,
        Coordinate::new([0.0, 0.0, 0.0, 1.0]),
        Coordinate::new([0.0, 0.0, 1.0, 0.0]),
        distance,
        severity,
    )
}

fn unscored(name: &str, line: u32) -> FunctionRecord {
    FunctionRecord::unscored(
        name.to_string(),
        line,
        Coordinate::ZERO,
        Coordinate::new([0.0, 0.0, 1.0, 0.0]),
    )
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

#[test]
fn records_sort_by_descending_distance_stably() {
    let records = vec![
        scored("a", 1, 0.3, Severity::Low),
        scored("b", 2, 1.4, Severity::Critical),
        unscored("c", 3),
        scored("d", 4, 0.3, Severity::Low),
    ];
    let report = FileReport::assemble("m.py".to_string(), records, 42);

    let order: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.qualified_name.as_str())
        .collect();
    // b first (largest), then a/d in source order (stable tie), unscored last.
    assert_eq!(order, ["b", "a", "d", "c"]);
}

#[test]
fn summary_counts_unknown_in_its_own_bucket() {
    let records = vec![
        scored("a", 1, 0.0, Severity::Harmonious),
        scored("b", 2, 1.4, Severity::Critical),
        unscored("c", 3),
    ];
    let report = FileReport::assemble("m.py".to_string(), records, 0);

    assert_eq!(report.total_functions, 3);
    assert_eq!(report.summary.harmonious, 1);
    assert_eq!(report.summary.critical, 1);
    assert_eq!(report.summary.unknown, 1);
    assert_eq!(report.summary.total(), 3);
    // Unknown never leaks into a scored band.
    assert_eq!(report.summary.count(Severity::Harmonious), 1);
    assert_eq!(report.summary.count(Severity::Unknown), 1);
}

#[test]
fn flagged_filters_by_rank() {
    let records = vec![
        scored("a", 1, 0.6, Severity::Medium),
        scored("b", 2, 1.4, Severity::Critical),
        scored("c", 3, 0.9, Severity::High),
        unscored("d", 4),
    ];
    let report = FileReport::assemble("m.py".to_string(), records, 0);

    let flagged: Vec<&str> = report
        .flagged(Severity::High)
        .map(|r| r.qualified_name.as_str())
        .collect();
    assert_eq!(flagged, ["b", "c"]);
}

#[test]
fn worst_skips_unscored_records() {
    let records = vec![unscored("u", 1), scored("s", 2, 0.1, Severity::Harmonious)];
    let report = FileReport::assemble("m.py".to_string(), records, 0);
    assert_eq!(report.worst().unwrap().qualified_name, "s");

    let empty = FileReport::assemble("e.py".to_string(), vec![], 0);
    assert!(empty.worst().is_none());
}

// ---------------------------------------------------------------------------
// Run aggregation
// ---------------------------------------------------------------------------

#[test]
fn run_summary_folds_files_and_failures() {
    let first = FileReport::assemble(
        "a.py".to_string(),
        vec![
            scored("a", 1, 1.4, Severity::Critical),
            scored("b", 2, 0.0, Severity::Harmonious),
        ],
        0,
    );
    let second = FileReport::assemble("b.py".to_string(), vec![unscored("c", 1)], 0);

    let mut run = RunSummary::default();
    run.fold(&first);
    run.fold(&second);
    run.record_failure();

    assert_eq!(run.files_analyzed, 2);
    assert_eq!(run.files_failed, 1);
    assert_eq!(run.total_functions, 3);
    assert_eq!(run.summary.critical, 1);
    assert_eq!(run.summary.harmonious, 1);
    assert_eq!(run.summary.unknown, 1);
}

#[test]
fn severity_summary_merge() {
    let mut a = SeveritySummary::default();
    a.record(Severity::Critical);
    a.record(Severity::Low);
    let mut b = SeveritySummary::default();
    b.record(Severity::Critical);
    b.record(Severity::Unknown);

    a.merge(&b);
    assert_eq!(a.critical, 2);
    assert_eq!(a.low, 1);
    assert_eq!(a.unknown, 1);
    assert_eq!(a.total(), 4);
}

// ---------------------------------------------------------------------------
// Serialized shape
// ---------------------------------------------------------------------------

#[test]
fn report_serializes_for_renderers() {
    let records = vec![scored("get_user", 42, 1.414, Severity::Critical)];
    let report = FileReport::assemble("svc.py".to_string(), records, 180);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["file"], "svc.py");
    assert_eq!(value["total_functions"], 1);
    assert_eq!(value["summary"]["critical"], 1);
    assert_eq!(value["records"][0]["qualified_name"], "get_user");
    assert_eq!(value["records"][0]["severity"], "critical");
    assert_eq!(value["records"][0]["line"], 42);
}
