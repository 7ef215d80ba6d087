#![allow(clippy::unwrap_used)]

use super::*;
use crate::semantic::PatternKind;

const ROLES: &str = "package Shop\n\
    import Common\n\
    kind Person\n\
    role Buyer specializes Person\n\
    role Seller specializes Person\n\
    relation Buyer [1] -- [1] Seller\n";

#[test]
fn test_result_header_fields() {
    let result = analyze(ROLES, "shop.tonto", &AnalysisOptions::default());
    assert_eq!(result.filename, "shop.tonto");
    assert_eq!(result.package.as_deref(), Some("Shop"));
    assert_eq!(result.imports, vec!["Common"]);
    assert!(!result.tokens.is_empty());
    assert!(!result.semantic_skipped);
    assert_eq!(result.symbols.classes.len(), 3);
}

#[test]
fn test_info_only_pattern_is_complete() {
    let result = analyze(ROLES, "shop.tonto", &AnalysisOptions::default());
    assert_eq!(result.patterns.len(), 1);
    assert!(result.incomplete_patterns.is_empty());
    assert_eq!(result.summary.pattern_counts["Role_Pattern"], 1);
    // The MISSING_GENSET info still reaches the flat stream
    let warning = &result.warnings[0];
    assert_eq!(warning.code, codes::MISSING_GENSET);
    assert_eq!(warning.pattern_type, Some(PatternKind::Role));
    assert_eq!(warning.anchor_class.as_deref(), Some("Person"));
    assert!(warning.suggestion.is_some());
    assert!(result.errors.is_empty());
}

#[test]
fn test_pattern_counts_list_every_kind() {
    let result = analyze("package Empty", "empty.tonto", &AnalysisOptions::default());
    let keys: Vec<&str> = result.summary.pattern_counts.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "Subkind_Pattern",
            "Role_Pattern",
            "Phase_Pattern",
            "Relator_Pattern",
            "Mode_Pattern",
            "RoleMixin_Pattern"
        ]
    );
    assert!(result.summary.pattern_counts.values().all(|&n| n == 0));
}

#[test]
fn test_syntax_errors_gate_semantics() {
    let source = "package P\nkind Person {\nrole Student specializes Person\n";
    let gated = analyze(source, "bad.tonto", &AnalysisOptions::default());
    assert!(gated.semantic_skipped);
    assert!(!gated.syntax_errors.is_empty());
    assert!(gated.symbols.classes.is_empty());
    assert_eq!(gated.errors.len(), gated.syntax_errors.len());

    let ungated = analyze(source, "bad.tonto", &AnalysisOptions::ungated());
    assert!(!ungated.semantic_skipped);
    assert!(!ungated.symbols.classes.is_empty());
}

#[test]
fn test_single_member_groups_option() {
    let source = "package P\nkind Person\nsubkind Student specializes Person\n";
    let reported = analyze(source, "t.tonto", &AnalysisOptions::default());
    assert!(
        reported
            .warnings
            .iter()
            .any(|w| w.code == codes::SINGLE_SPECIALIZATION)
    );

    let options = AnalysisOptions {
        report_single_member_groups: false,
        ..AnalysisOptions::default()
    };
    let quiet = analyze(source, "t.tonto", &options);
    assert!(quiet.warnings.is_empty());
    assert_eq!(quiet.summary.total_patterns, 0);
}

#[test]
fn test_pattern_errors_reach_error_stream() {
    let result = analyze(
        "package P\nkind Person\nrelator Employment { @mediation [1] -- [1] Person }",
        "t.tonto",
        &AnalysisOptions::default(),
    );
    assert_eq!(result.incomplete_patterns.len(), 1);
    let entry = result
        .errors
        .iter()
        .find(|e| e.code == codes::INSUFFICIENT_MEDIATIONS)
        .unwrap();
    assert_eq!(entry.line, Some(3));
}

#[test]
fn test_json_output() {
    let options = AnalysisOptions {
        include_tokens: false,
        ..AnalysisOptions::default()
    };
    let json = analyze(ROLES, "shop.tonto", &options).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("tokens").is_none());
    assert_eq!(value["patterns"][0]["pattern_type"], "Role_Pattern");
    assert_eq!(value["summary"]["pattern_counts"]["Mode_Pattern"], 0);
    assert_eq!(value["warnings"][0]["suggestion"]["action"], "insert_code");
}

#[test]
fn test_analyze_many_keeps_order() {
    let inputs = vec![
        ("b.tonto", "package B\nkind Car"),
        ("a.tonto", "package A\nkind Person"),
    ];
    let project = analyze_many(&inputs, &AnalysisOptions::default());
    let names: Vec<&str> = project.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["b.tonto", "a.tonto"]);
    assert!(project.ontology.is_none());
    assert_eq!(project.summary.files, 2);
    assert_eq!(project.summary.files_with_errors, 0);
}
