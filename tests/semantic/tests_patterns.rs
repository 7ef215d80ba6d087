#![allow(clippy::unwrap_used)]

use rstest::rstest;
use tonto::semantic::diagnostics::{Severity, codes};
use tonto::semantic::patterns::{PatternElements, PatternStatus};
use tonto::semantic::PatternKind;

use crate::helpers::analysis_helpers::{analyze_default, pattern_at, patterns_of};
use crate::helpers::source_fixtures::*;

// ============================================================================
// Subkind
// ============================================================================

#[test]
fn test_subkind_pattern_with_disjoint_genset_is_complete() {
    let result = analyze_default(PERSON_SUBKINDS_WITH_GENSET);
    let pattern = pattern_at(&result, PatternKind::Subkind, "Person");

    assert_eq!(pattern.status, PatternStatus::Complete);
    assert!(pattern.constraints.disjoint);
    assert!(pattern.violations.is_empty(), "{:?}", pattern.violations);
    assert_eq!(result.summary.complete_patterns, 1);
}

#[test]
fn test_subkind_pattern_without_genset_is_incomplete() {
    let result = analyze_default(PERSON_SUBKINDS);
    let pattern = pattern_at(&result, PatternKind::Subkind, "Person");

    assert_eq!(pattern.status, PatternStatus::Incomplete);
    let violation = &pattern.violations[0];
    assert_eq!(violation.code, codes::MISSING_GENSET);
    assert_eq!(violation.severity, Severity::Warning);

    let suggestion = pattern.suggestion_for(violation).unwrap();
    assert!(suggestion.code_suggestion.contains(
        "disjoint genset Person_Genset { general Person specifics Student, Employee }"
    ));
    assert_eq!(result.incomplete_patterns.len(), 1);
}

// ============================================================================
// Relator / Mode
// ============================================================================

#[test]
fn test_relator_with_one_mediation_is_insufficient() {
    let result = analyze_default(EMPLOYMENT_SINGLE_MEDIATION);
    let pattern = pattern_at(&result, PatternKind::Relator, "Employment");

    assert!(!pattern.is_complete());
    assert!(pattern.has_violation(codes::INSUFFICIENT_MEDIATIONS));
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.code == codes::INSUFFICIENT_MEDIATIONS)
    );
}

#[test]
fn test_mode_gate_flips_with_external_dependence() {
    let before = analyze_default(HEADACHE_WITHOUT_DEPENDENCE);
    let pattern = pattern_at(&before, PatternKind::Mode, "Headache");
    assert!(!pattern.is_complete());
    assert!(pattern.has_violation(codes::MODE_WITHOUT_EXTERNAL_DEPENDENCE));
    assert!(!pattern.has_violation(codes::MODE_WITHOUT_CHARACTERIZATION));

    let after = analyze_default(HEADACHE_COMPLETE);
    let pattern = pattern_at(&after, PatternKind::Mode, "Headache");
    assert!(pattern.is_complete(), "{:?}", pattern.violations);
    assert_eq!(
        pattern.elements,
        PatternElements::Mode {
            mode: "Headache".into(),
            characterizes: vec!["Person".into()],
            depends_on: vec!["Virus".into()],
        }
    );
}

// ============================================================================
// Phase vs Role exclusivity
// ============================================================================

#[test]
fn test_phase_in_two_gensets_is_an_error() {
    let result = analyze_default(PHASES_IN_TWO_GENSETS);
    let pattern = pattern_at(&result, PatternKind::Phase, "Person");

    assert!(!pattern.is_complete());
    let violation = pattern
        .violations
        .iter()
        .find(|v| v.code == codes::PHASE_IN_MULTIPLE_GENSETS)
        .unwrap();
    assert_eq!(violation.severity, Severity::Error);
}

#[test]
fn test_role_in_two_gensets_is_informational() {
    let result = analyze_default(ROLES_IN_TWO_GENSETS);
    let pattern = pattern_at(&result, PatternKind::Role, "Person");

    assert!(pattern.is_complete(), "{:?}", pattern.violations);
    let infos: Vec<_> = pattern
        .violations
        .iter()
        .filter(|v| v.code == codes::ROLE_IN_MULTIPLE_GENSETS)
        .collect();
    assert_eq!(infos.len(), 2);
    assert!(infos.iter().all(|v| v.severity == Severity::Info));
    assert!(result.errors.is_empty());
}

// ============================================================================
// Whole model
// ============================================================================

#[rstest]
#[case(PatternKind::Subkind, 1)]
#[case(PatternKind::Role, 2)]
#[case(PatternKind::Phase, 1)]
#[case(PatternKind::Relator, 1)]
#[case(PatternKind::Mode, 1)]
#[case(PatternKind::RoleMixin, 1)]
fn test_car_rental_pattern_counts(#[case] kind: PatternKind, #[case] expected: usize) {
    let result = analyze_default(CAR_RENTAL);
    assert_eq!(patterns_of(&result, kind).len(), expected);
    assert_eq!(result.summary.pattern_counts[kind.as_str()], expected);
}

#[test]
fn test_car_rental_relator_links_material_relation() {
    let result = analyze_default(CAR_RENTAL);
    let pattern = pattern_at(&result, PatternKind::Relator, "Rental");
    assert_eq!(
        pattern.elements,
        PatternElements::Relator {
            relator: "Rental".into(),
            mediated: vec!["Customer".into(), "RentedCar".into()],
            material_relations: vec!["rents".into()],
        }
    );
}

#[test]
fn test_role_mixin_collects_roles_of_different_kinds() {
    let result = analyze_default(CAR_RENTAL);
    let pattern = pattern_at(&result, PatternKind::RoleMixin, "Insured");
    assert!(pattern.is_complete(), "{:?}", pattern.violations);
    assert_eq!(
        pattern.elements,
        PatternElements::RoleMixin {
            role_mixin: "Insured".into(),
            specifics: vec!["InsuredPerson".into(), "InsuredOrganization".into()],
            genset: Some("InsuredKinds".into()),
        }
    );
}
