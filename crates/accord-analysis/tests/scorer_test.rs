//! Harmony scorer tests: the worked scoring scenarios, the
//! insufficient-signal policy, and threshold injection.

use accord_analysis::coords::EmbedCache;
use accord_analysis::parser::types::{BodyConstruct, BodyConstructs, FunctionSyntax};
use accord_analysis::scorer::HarmonyScorer;
use accord_analysis::vocabulary::Vocabulary;
use accord_core::{HarmonyThresholds, Severity};

fn function(name: &str, body: Vec<BodyConstruct>) -> FunctionSyntax {
    FunctionSyntax {
        qualified_name: name.to_string(),
        name: name.to_string(),
        line: 1,
        body: BodyConstructs::from_vec(body),
        nested: Vec::new(),
    }
}

fn call(head: &str) -> BodyConstruct {
    BodyConstruct::Call {
        head: head.to_string(),
    }
}

fn score_with(thresholds: HarmonyThresholds, f: &FunctionSyntax) -> accord_analysis::FunctionRecord {
    let vocab = Vocabulary::default_table();
    let cache = EmbedCache::default();
    HarmonyScorer::new(&vocab, &cache, thresholds).score(f)
}

fn score(f: &FunctionSyntax) -> accord_analysis::FunctionRecord {
    score_with(HarmonyThresholds::default(), f)
}

// ---------------------------------------------------------------------------
// Worked scenarios
// ---------------------------------------------------------------------------

#[test]
fn getter_that_deletes_is_critical() {
    // Name {get, user} → pure inspection; body {delete} → pure mutation.
    let f = function(
        "get_user",
        vec![BodyConstruct::MethodCall {
            head: "delete_user".to_string(),
        }],
    );
    let record = score(&f);

    assert_eq!(record.intent.components(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(record.execution.components(), [0.0, 0.0, 1.0, 0.0]);
    assert!((record.distance - std::f64::consts::SQRT_2).abs() < 1e-9);
    assert_eq!(record.severity, Severity::Critical);
}

#[test]
fn getter_that_queries_is_harmonious() {
    // Name {get, user} and body {return, query} land on the same axis.
    let f = function("get_user", vec![BodyConstruct::Return, call("query")]);
    let record = score(&f);

    assert_eq!(record.intent, record.execution);
    assert_eq!(record.distance, 0.0);
    assert_eq!(record.severity, Severity::Harmonious);
}

#[test]
fn mixed_axes_land_in_a_middle_band() {
    // Name {save, user} → half creation, half inspection;
    // body {write} → pure creation. Distance √0.5 ≈ 0.707.
    let f = function("save_user", vec![call("write")]);
    let record = score(&f);

    assert!((record.distance - 0.5f64.sqrt()).abs() < 1e-9);
    assert_eq!(record.severity, Severity::Medium);
}

#[test]
fn unknown_name_tokens_in_intent_are_ignored() {
    // "flurble" is not in the table; intent stays pure inspection.
    let f = function("get_flurble", vec![call("query")]);
    let record = score(&f);
    assert_eq!(record.intent.components(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(record.severity, Severity::Harmonious);
}

// ---------------------------------------------------------------------------
// Insufficient signal
// ---------------------------------------------------------------------------

#[test]
fn unrecognized_name_is_unknown_not_a_score() {
    let f = function("xyzzyq", vec![call("compute")]);
    let record = score(&f);

    assert_eq!(record.severity, Severity::Unknown);
    assert!(record.intent.is_zero());
    assert!(!record.execution.is_zero());
    // By convention the distance field is 0.0, but it carries no meaning.
    assert_eq!(record.distance, 0.0);
}

#[test]
fn empty_body_is_unknown_not_harmonious() {
    let f = function("get_user", vec![]);
    let record = score(&f);

    assert_eq!(record.severity, Severity::Unknown);
    assert!(record.execution.is_zero());
    assert!(!record.intent.is_zero());
}

#[test]
fn body_of_only_unclassified_syntax_is_unknown() {
    let f = function(
        "get_user",
        vec![BodyConstruct::Other {
            kind: "with_statement".to_string(),
        }],
    );
    let record = score(&f);
    assert_eq!(record.severity, Severity::Unknown);
}

// ---------------------------------------------------------------------------
// Threshold injection
// ---------------------------------------------------------------------------

#[test]
fn custom_thresholds_change_bands() {
    let strict = HarmonyThresholds::validated(0.05, 0.1, 0.2, 0.3).unwrap();
    // √0.5 ≈ 0.707 is Medium by default, Critical under strict bands.
    let f = function("save_user", vec![call("write")]);
    assert_eq!(score(&f).severity, Severity::Medium);
    assert_eq!(score_with(strict, &f).severity, Severity::Critical);
}

#[test]
fn nested_function_markers_do_not_score() {
    // A body of only a nested-def marker has no recognized verbs.
    let f = function("get_user", vec![BodyConstruct::NestedFunction]);
    assert_eq!(score(&f).severity, Severity::Unknown);
}
