//! Phase pattern: mutually exclusive phases of a common type.
//!
//! Phases partition their general, so the genset must be disjoint and a
//! phase may belong to exactly one genset.

use smol_str::SmolStr;

use super::genset::{check_genset_covers, rewrite_genset, suggest_genset};
use super::pattern::{PatternBuilder, PatternKind, Suggestion, SuggestionAction, Violation};
use super::specialization::{Group, SpecializationRules, detect_specializations};
use super::{Detection, PatternDetector};
use crate::parser::ast::Genset;
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::{Diagnostic, codes};
use crate::semantic::symbol_table::SymbolTable;

pub struct PhaseDetector;

impl PatternDetector for PhaseDetector {
    fn kind(&self) -> PatternKind {
        Self::KIND
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        detect_specializations(self, table)
    }
}

fn multiple_gensets_message(phase: &str, gensets: &[&Genset]) -> String {
    let names: Vec<&str> = gensets.iter().map(|g| g.name.as_str()).collect();
    format!(
        "Phase '{phase}' appears in {} gensets ({}); a phase belongs to exactly one partition",
        gensets.len(),
        names.join(", ")
    )
}

impl SpecializationRules for PhaseDetector {
    const KIND: PatternKind = PatternKind::Phase;
    const CHILD: ClassStereotype = ClassStereotype::Phase;
    const ALLOWED_PARENTS: &'static [ClassStereotype] = &[
        ClassStereotype::Kind,
        ClassStereotype::Subkind,
        ClassStereotype::Category,
        ClassStereotype::Phase,
    ];
    const FORBIDDEN_PARENTS: &'static [ClassStereotype] = &[
        ClassStereotype::Role,
        ClassStereotype::RoleMixin,
        ClassStereotype::HistoricalRole,
        ClassStereotype::HistoricalRoleMixin,
    ];

    fn check(&self, group: &Group<'_, '_>, builder: &mut PatternBuilder) {
        let general = group.general_name();

        match group.genset {
            None => {
                builder.violation(Violation::warning(
                    codes::MISSING_GENSET,
                    format!("Phase_Pattern for '{general}' should have a disjoint genset"),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::InsertCode,
                    "Add a disjoint genset partitioning the phases",
                    suggest_genset(general, &group.specifics, true, true),
                ));
            }
            Some(genset) => {
                if !genset.disjoint {
                    builder.violation(Violation::error(
                        codes::MISSING_DISJOINT,
                        format!("Phase genset '{}' must be 'disjoint'", genset.name),
                    ));
                    builder.suggestion(Suggestion::new(
                        SuggestionAction::AddKeyword,
                        "Add 'disjoint' keyword to genset",
                        rewrite_genset(genset, &genset.specifics, true, genset.complete),
                    ));
                }
                if !genset.complete {
                    builder.violation(Violation::info(
                        codes::MISSING_COMPLETE,
                        format!(
                            "Phase genset '{}' is not 'complete'; phases usually cover every instance",
                            genset.name
                        ),
                    ));
                    builder.suggestion(Suggestion::new(
                        SuggestionAction::AddKeyword,
                        "Add 'complete' keyword to genset",
                        rewrite_genset(genset, &genset.specifics, genset.disjoint, true),
                    ));
                }
                check_genset_covers(builder, genset, &group.specifics, "phases");
            }
        }

        for phase in &group.specifics {
            let gensets = group.table.gensets_with_specific(phase);
            if gensets.len() > 1 {
                builder.violation(Violation::error(
                    codes::PHASE_IN_MULTIPLE_GENSETS,
                    multiple_gensets_message(phase, &gensets),
                ));
            }
        }
    }

    /// Phases outside any group are still bound to a single genset
    fn standalone(&self, table: &SymbolTable<'_>, grouped: &[SmolStr]) -> Vec<Diagnostic> {
        table
            .classes_by_stereotype(ClassStereotype::Phase)
            .filter(|phase| !grouped.contains(&phase.name))
            .filter_map(|phase| {
                let gensets = table.gensets_with_specific(&phase.name);
                (gensets.len() > 1).then(|| {
                    Diagnostic::error(
                        codes::PHASE_IN_MULTIPLE_GENSETS,
                        multiple_gensets_message(&phase.name, &gensets),
                    )
                    .with_position(phase.position)
                })
            })
            .collect()
    }
}
