//! Subkind pattern: a kind or subkind partitioned by two or more subkinds.

use super::genset::{check_genset_covers, rewrite_genset, suggest_genset};
use super::pattern::{PatternBuilder, PatternKind, Suggestion, SuggestionAction, Violation};
use super::specialization::{Group, SpecializationRules, detect_specializations};
use super::{Detection, PatternDetector};
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

pub struct SubkindDetector;

impl PatternDetector for SubkindDetector {
    fn kind(&self) -> PatternKind {
        Self::KIND
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        detect_specializations(self, table)
    }
}

impl SpecializationRules for SubkindDetector {
    const KIND: PatternKind = PatternKind::Subkind;
    const CHILD: ClassStereotype = ClassStereotype::Subkind;
    const ALLOWED_PARENTS: &'static [ClassStereotype] =
        &[ClassStereotype::Kind, ClassStereotype::Subkind];
    /// A rigid subkind cannot specialize an anti-rigid type
    const FORBIDDEN_PARENTS: &'static [ClassStereotype] = &[
        ClassStereotype::Role,
        ClassStereotype::Phase,
        ClassStereotype::RoleMixin,
        ClassStereotype::PhaseMixin,
        ClassStereotype::HistoricalRole,
        ClassStereotype::HistoricalRoleMixin,
    ];

    fn check(&self, group: &Group<'_, '_>, builder: &mut PatternBuilder) {
        let general = group.general_name();

        let Some(genset) = group.genset else {
            builder.violation(Violation::warning(
                codes::MISSING_GENSET,
                format!(
                    "Subkind_Pattern for '{general}' should have a genset to formalize the generalization"
                ),
            ));
            builder.suggestion(Suggestion::new(
                SuggestionAction::InsertCode,
                "Add a genset to formalize the subkind pattern",
                suggest_genset(general, &group.specifics, true, false),
            ));
            return;
        };

        check_genset_covers(builder, genset, &group.specifics, "subkinds");

        if !genset.disjoint {
            builder.violation(Violation::warning(
                codes::MISSING_DISJOINT,
                format!(
                    "Subkind_Pattern genset '{}' should have 'disjoint' keyword",
                    genset.name
                ),
            ));
            builder.suggestion(Suggestion::new(
                SuggestionAction::AddKeyword,
                "Add 'disjoint' keyword to genset",
                rewrite_genset(genset, &genset.specifics, true, genset.complete),
            ));
        }

        let gensets = group.table.gensets_with_general(general);
        if gensets.len() > 1 {
            let names: Vec<&str> = gensets.iter().map(|g| g.name.as_str()).collect();
            builder.violation(Violation::info(
                codes::MULTIPLE_GENSETS,
                format!(
                    "'{general}' is the general of {} gensets: {}",
                    gensets.len(),
                    names.join(", ")
                ),
            ));
        }
    }
}
