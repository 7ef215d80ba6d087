#![allow(clippy::unwrap_used)]

use tonto::semantic::diagnostics::codes;
use tonto::{AnalysisOptions, analyze};

use crate::helpers::analysis_helpers::analyze_default;
use crate::helpers::source_fixtures::*;

#[test]
fn test_full_model_summary() {
    let result = analyze_default(CAR_RENTAL);
    let summary = &result.summary;

    assert_eq!(summary.total_patterns, 7);
    assert_eq!(summary.complete_patterns, 7);
    assert_eq!(summary.incomplete_patterns, 0);
    assert_eq!(summary.pattern_counts["Role_Pattern"], 2);
    assert_eq!(result.package.as_deref(), Some("CarRental"));
    assert_eq!(result.imports, vec!["Base"]);
}

#[test]
fn test_full_model_warnings() {
    let result = analyze_default(CAR_RENTAL);

    // Organization has one role only
    let single: Vec<_> = result
        .warnings
        .iter()
        .filter(|w| w.code == codes::SINGLE_SPECIALIZATION)
        .collect();
    assert_eq!(single.len(), 1);
    assert!(single[0].message.contains("Organization"));
    assert!(single[0].pattern_type.is_none());

    // Car is the general of both the subkind and the phase genset
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.code == codes::MULTIPLE_GENSETS && w.anchor_class.as_deref() == Some("Car"))
    );
}

#[test]
fn test_mode_gate_moves_pattern_between_lists() {
    let before = analyze_default(HEADACHE_WITHOUT_DEPENDENCE);
    assert!(before.patterns.is_empty());
    assert_eq!(before.incomplete_patterns.len(), 1);
    assert_eq!(before.summary.incomplete_patterns, 1);
    assert!(
        before
            .errors
            .iter()
            .any(|e| e.code == codes::MODE_WITHOUT_EXTERNAL_DEPENDENCE)
    );

    let after = analyze_default(HEADACHE_COMPLETE);
    assert_eq!(after.patterns.len(), 1);
    assert!(after.incomplete_patterns.is_empty());
    assert!(after.errors.is_empty());
}

#[test]
fn test_error_violation_appears_in_both_streams() {
    let result = analyze_default(EMPLOYMENT_SINGLE_MEDIATION);
    let in_warnings = result
        .warnings
        .iter()
        .find(|w| w.code == codes::INSUFFICIENT_MEDIATIONS)
        .unwrap();
    assert_eq!(in_warnings.anchor_class.as_deref(), Some("Employment"));
    assert!(in_warnings.suggestion.is_some());
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.code == codes::INSUFFICIENT_MEDIATIONS)
    );
}

#[test]
fn test_empty_filename_is_replaced() {
    let result = analyze("package P", "", &AnalysisOptions::default());
    assert_eq!(result.filename, "<unknown>");
}

#[test]
fn test_json_carries_every_section() {
    let json = analyze_default(CAR_RENTAL).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "filename",
        "package",
        "imports",
        "tokens",
        "ast",
        "symbols",
        "patterns",
        "incomplete_patterns",
        "errors",
        "warnings",
        "lex_errors",
        "syntax_errors",
        "summary",
    ] {
        assert!(value.get(key).is_some(), "missing '{key}'");
    }
    assert_eq!(value["summary"]["total_patterns"], 7);
    assert_eq!(value["symbols"]["enums"][0]["name"], "Category");
}
