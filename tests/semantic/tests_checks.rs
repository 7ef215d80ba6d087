#![allow(clippy::unwrap_used)]

use rstest::rstest;
use tonto::semantic::Severity;
use tonto::semantic::diagnostics::codes;

use crate::helpers::analysis_helpers::{analyze_default, assert_no_errors};
use crate::helpers::source_fixtures::CAR_RENTAL;

#[test]
fn test_full_model_has_no_errors() {
    let result = analyze_default(CAR_RENTAL);
    assert!(!result.semantic_skipped);
    assert_no_errors(&result);
}

#[rstest]
#[case::undeclared_parent("package P\nsubkind Student specializes Person\n", codes::UNDEFINED_PARENT, 2)]
#[case::unknown_type("package P\nkind Person {\n  age: Years\n}\n", codes::UNRESOLVED_TYPE, 3)]
#[case::dangling_relation("package P\nkind Person\nrelation Person [1] -- [1] Pet\n", codes::RELATION_TARGET_NOT_FOUND, 3)]
#[case::inverted_cardinality("package P\nkind Person {\n  nick: String [3..1]\n}\n", codes::INVALID_CARDINALITY, 3)]
fn test_semantic_error_is_located(
    #[case] source: &str,
    #[case] code: &str,
    #[case] line: u32,
) {
    let result = analyze_default(source);
    let entry = result.errors.iter().find(|e| e.code == code).unwrap();
    assert_eq!(entry.severity, Severity::Error);
    assert_eq!(entry.line, Some(line), "{entry:?}");
}

#[test]
fn test_genset_shape_warnings() {
    let source = "package P\n\
        kind Person\n\
        kind Car\n\
        subkind Student specializes Person\n\
        genset Solo { general Person specifics Student }\n\
        genset Stray { general Person specifics Student, Car }\n";
    let result = analyze_default(source);

    let found: Vec<&str> = result.warnings.iter().map(|w| w.code.as_str()).collect();
    assert!(found.contains(&codes::GENSET_SINGLE_SPECIFIC), "{found:?}");
    assert!(found.contains(&codes::GENSET_SPECIFIC_NOT_CHILD), "{found:?}");
}
