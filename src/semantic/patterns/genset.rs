//! Generalization-set helpers shared by the detectors.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::pattern::{Constraints, PatternBuilder, Suggestion, SuggestionAction, Violation};
use crate::parser::ast::Genset;
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

/// The genset over `general` whose specifics equal `specifics`; failing
/// that, the first one sharing at least one specific.
pub fn find_matching_genset<'a>(
    table: &SymbolTable<'a>,
    general: &str,
    specifics: &[SmolStr],
) -> Option<&'a Genset> {
    let wanted: FxHashSet<&str> = specifics.iter().map(SmolStr::as_str).collect();
    let candidates = table.gensets_with_general(general);

    let exact = candidates.iter().find(|g| {
        let listed: FxHashSet<&str> = g.specifics.iter().map(SmolStr::as_str).collect();
        listed == wanted
    });
    exact
        .or_else(|| {
            candidates
                .iter()
                .find(|g| g.specifics.iter().any(|s| wanted.contains(s.as_str())))
        })
        .copied()
}

/// One-line genset declaration for code suggestions:
/// `disjoint genset Person_Genset { general Person specifics Student, Employee }`
pub fn suggest_genset(
    general: &str,
    specifics: &[SmolStr],
    disjoint: bool,
    complete: bool,
) -> String {
    snippet(&format!("{general}_Genset"), general, specifics, disjoint, complete)
}

/// Same snippet, keeping the name and general of an existing genset
pub fn rewrite_genset(
    genset: &Genset,
    specifics: &[SmolStr],
    disjoint: bool,
    complete: bool,
) -> String {
    snippet(&genset.name, &genset.general, specifics, disjoint, complete)
}

fn snippet(
    name: &str,
    general: &str,
    specifics: &[SmolStr],
    disjoint: bool,
    complete: bool,
) -> String {
    let mut modifiers = String::new();
    if disjoint {
        modifiers.push_str("disjoint ");
    }
    if complete {
        modifiers.push_str("complete ");
    }
    let specifics = specifics
        .iter()
        .map(SmolStr::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{modifiers}genset {name} {{ general {general} specifics {specifics} }}")
}

pub fn constraints_of(genset: Option<&Genset>) -> Constraints {
    genset
        .map(|g| Constraints {
            disjoint: g.disjoint,
            complete: g.complete,
        })
        .unwrap_or_default()
}

/// Detected specifics the genset does not list, in detection order
pub fn missing_specifics(genset: &Genset, detected: &[SmolStr]) -> Vec<SmolStr> {
    detected
        .iter()
        .filter(|s| !genset.has_specific(s))
        .cloned()
        .collect()
}

/// INCOMPLETE_GENSET_SPECIFICS with a rewritten genset, if anything is missing
pub fn check_genset_covers(
    builder: &mut PatternBuilder,
    genset: &Genset,
    detected: &[SmolStr],
    noun: &str,
) {
    let missing = missing_specifics(genset, detected);
    if missing.is_empty() {
        return;
    }
    let listed: Vec<&str> = missing.iter().map(SmolStr::as_str).collect();
    builder.violation(Violation::warning(
        codes::INCOMPLETE_GENSET_SPECIFICS,
        format!("Genset '{}' is missing {noun}: {}", genset.name, listed.join(", ")),
    ));
    let mut all = genset.specifics.clone();
    all.extend(missing);
    builder.suggestion(Suggestion::new(
        SuggestionAction::ModifyCode,
        format!("Update genset to include all {noun}"),
        rewrite_genset(genset, &all, genset.disjoint, genset.complete),
    ));
}
