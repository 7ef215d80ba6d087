#![allow(clippy::unwrap_used)]

use rstest::rstest;

use super::*;
use crate::parser::parse_source;
use crate::semantic::diagnostics::{Severity, codes};

fn detect(source: &str) -> Detection {
    let parsed = parse_source(source, "patterns.tonto");
    assert!(parsed.ok(), "{:?}", parsed.errors);
    let table = SymbolTable::from_file(&parsed.file);
    detect_all(&table)
}

fn only(detection: &Detection, kind: PatternKind) -> &Pattern {
    let mut found = detection.patterns.iter().filter(|p| p.pattern_type == kind);
    let pattern = found.next().unwrap();
    assert!(found.next().is_none(), "more than one {kind}");
    pattern
}

const PERSON: &str = "package P\n\
    kind Person\n\
    subkind Student specializes Person\n\
    subkind Employee specializes Person\n";

// ============================================================================
// Subkind
// ============================================================================

#[test]
fn test_subkind_complete_with_disjoint_genset() {
    let source =
        format!("{PERSON}disjoint genset G {{ general Person specifics Student, Employee }}\n");
    let detection = detect(&source);
    let pattern = only(&detection, PatternKind::Subkind);
    assert!(pattern.is_complete(), "{:?}", pattern.violations);
    assert!(pattern.constraints.disjoint);
    assert_eq!(
        pattern.elements,
        PatternElements::Specialization {
            general: "Person".into(),
            specifics: vec!["Student".into(), "Employee".into()],
            genset: Some("G".into()),
        }
    );
}

#[test]
fn test_subkind_without_genset_is_incomplete() {
    let detection = detect(PERSON);
    let pattern = only(&detection, PatternKind::Subkind);
    assert_eq!(pattern.status, PatternStatus::Incomplete);
    assert!(pattern.has_violation(codes::MISSING_GENSET));
    assert!(pattern.suggestions[0].code_suggestion.contains(
        "disjoint genset Person_Genset { general Person specifics Student, Employee }"
    ));
}

#[test]
fn test_subkind_genset_missing_disjoint_and_specific() {
    let source = format!(
        "{PERSON}subkind Retiree specializes Person\n\
         genset G {{ general Person specifics Student, Employee }}\n"
    );
    let pattern = only(&detect(&source), PatternKind::Subkind).clone();
    assert!(pattern.has_violation(codes::MISSING_DISJOINT));
    assert!(pattern.has_violation(codes::INCOMPLETE_GENSET_SPECIFICS));
    let fix = &pattern.suggestions[0];
    assert_eq!(fix.action, SuggestionAction::ModifyCode);
    assert_eq!(
        fix.code_suggestion,
        "genset G { general Person specifics Student, Employee, Retiree }"
    );
}

#[test]
fn test_single_subkind_is_a_standalone_finding() {
    let detection = detect("package P\nkind Person\nsubkind Student specializes Person\n");
    assert!(detection.patterns.is_empty());
    assert_eq!(detection.findings.len(), 1);
    assert_eq!(detection.findings[0].code, codes::SINGLE_SPECIALIZATION);
    assert_eq!(detection.findings[0].severity, Severity::Warning);
}

#[test]
fn test_subkind_of_role_is_invalid() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         role Student specializes Person\n\
         subkind Freshman specializes Student\n",
    );
    let pattern = only(&detection, PatternKind::Subkind);
    assert_eq!(pattern.anchor_class, "Student");
    assert!(pattern.has_violation(codes::INVALID_SPECIALIZATION));
    assert!(!pattern.is_complete());
}

// ============================================================================
// Phase vs Role
// ============================================================================

#[test]
fn test_phase_in_two_gensets_is_an_error() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         phase Child specializes Person\n\
         phase Adult specializes Person\n\
         disjoint complete genset Age { general Person specifics Child, Adult }\n\
         disjoint complete genset Legal { general Person specifics Adult, Child }\n",
    );
    let pattern = only(&detection, PatternKind::Phase);
    let violation = pattern
        .violations
        .iter()
        .find(|v| v.code == codes::PHASE_IN_MULTIPLE_GENSETS)
        .unwrap();
    assert_eq!(violation.severity, Severity::Error);
    assert!(!pattern.is_complete());
}

#[test]
fn test_phase_genset_without_disjoint_is_an_error() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         phase Child specializes Person\n\
         phase Adult specializes Person\n\
         complete genset Age { general Person specifics Child, Adult }\n",
    );
    let pattern = only(&detection, PatternKind::Phase);
    let violation = pattern
        .violations
        .iter()
        .find(|v| v.code == codes::MISSING_DISJOINT)
        .unwrap();
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(pattern.status, PatternStatus::Incomplete);
    let fix = pattern.suggestion_for(violation).unwrap();
    assert_eq!(fix.action, SuggestionAction::AddKeyword);
    assert_eq!(
        fix.code_suggestion,
        "disjoint complete genset Age { general Person specifics Child, Adult }"
    );
}

#[test]
fn test_phase_genset_without_complete_is_info() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         phase Child specializes Person\n\
         phase Adult specializes Person\n\
         disjoint genset Age { general Person specifics Child, Adult }\n",
    );
    let pattern = only(&detection, PatternKind::Phase);
    let violation = pattern
        .violations
        .iter()
        .find(|v| v.code == codes::MISSING_COMPLETE)
        .unwrap();
    assert_eq!(violation.severity, Severity::Info);
    assert!(!pattern.has_violation(codes::MISSING_DISJOINT));
    assert!(pattern.is_complete(), "{:?}", pattern.violations);
    assert_eq!(
        pattern.suggestion_for(violation).unwrap().code_suggestion,
        "disjoint complete genset Age { general Person specifics Child, Adult }"
    );
}

#[test]
fn test_role_in_two_gensets_is_info() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         role Buyer specializes Person\n\
         role Seller specializes Person\n\
         genset Trade { general Person specifics Buyer, Seller }\n\
         genset Market { general Person specifics Seller, Buyer }\n\
         relation Buyer [1] -- [1] Seller\n",
    );
    let pattern = only(&detection, PatternKind::Role);
    let violation = pattern
        .violations
        .iter()
        .find(|v| v.code == codes::ROLE_IN_MULTIPLE_GENSETS)
        .unwrap();
    assert_eq!(violation.severity, Severity::Info);
    assert!(pattern.is_complete(), "{:?}", pattern.violations);
}

#[test]
fn test_disjoint_role_genset_is_an_error() {
    let detection = detect(
        "package P\n\
         kind Person\n\
         role Buyer specializes Person\n\
         role Seller specializes Person\n\
         disjoint genset Trade { general Person specifics Buyer, Seller }\n",
    );
    let pattern = only(&detection, PatternKind::Role);
    assert!(pattern.has_violation(codes::DISJOINT_ROLE_GENSET));
    assert!(!pattern.is_complete());
    assert_eq!(
        pattern.suggestions[0].code_suggestion,
        "genset Trade { general Person specifics Buyer, Seller }"
    );
}

#[rstest]
#[case::phase_parent("phase Child specializes Person\nrole Pupil specializes Child\nrole Toddler specializes Child\n")]
#[case::relator_parent("relator Contract\nrole Signer specializes Contract\nrole Witness specializes Contract\n")]
fn test_role_forbidden_parent(#[case] body: &str) {
    let detection = detect(&format!("package P\nkind Person\n{body}"));
    let pattern = only(&detection, PatternKind::Role);
    let errors = pattern
        .violations
        .iter()
        .filter(|v| v.code == codes::INVALID_SPECIALIZATION)
        .count();
    assert_eq!(errors, 2);
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_detector_order() {
    let kinds: Vec<PatternKind> = DETECTORS.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, PatternKind::ALL);
}

#[test]
fn test_detection_is_deterministic() {
    let source = format!(
        "{PERSON}role Buyer specializes Person\nrole Seller specializes Person\n\
         relator Sale {{ @mediation [1] -- [1] Buyer\n@mediation [1] -- [1] Seller }}\n"
    );
    let first = detect(&source);
    let second = detect(&source);
    assert_eq!(first.patterns, second.patterns);
    assert_eq!(first.findings, second.findings);
}
