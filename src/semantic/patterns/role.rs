//! Role pattern: roles played by instances of a common type.
//!
//! Roles overlap, so their genset is optional and must not be disjoint.
//! A role may belong to several gensets.

use super::genset::{check_genset_covers, rewrite_genset, suggest_genset};
use super::pattern::{PatternBuilder, PatternKind, Suggestion, SuggestionAction, Violation};
use super::specialization::{Group, SpecializationRules, detect_specializations};
use super::{Detection, PatternDetector};
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

pub struct RoleDetector;

impl PatternDetector for RoleDetector {
    fn kind(&self) -> PatternKind {
        Self::KIND
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        detect_specializations(self, table)
    }
}

impl SpecializationRules for RoleDetector {
    const KIND: PatternKind = PatternKind::Role;
    const CHILD: ClassStereotype = ClassStereotype::Role;
    const ALLOWED_PARENTS: &'static [ClassStereotype] = &[
        ClassStereotype::Kind,
        ClassStereotype::Subkind,
        ClassStereotype::Category,
        ClassStereotype::Role,
        ClassStereotype::RoleMixin,
    ];
    const FORBIDDEN_PARENTS: &'static [ClassStereotype] = &[
        ClassStereotype::Phase,
        ClassStereotype::Mode,
        ClassStereotype::IntrinsicMode,
        ClassStereotype::ExtrinsicMode,
        ClassStereotype::Relator,
    ];

    fn check(&self, group: &Group<'_, '_>, builder: &mut PatternBuilder) {
        let general = group.general_name();

        match group.genset {
            None => {
                builder.violation(Violation::info(
                    codes::MISSING_GENSET,
                    format!("Role_Pattern for '{general}' has no genset; roles may overlap"),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::InsertCode,
                    "Optionally add a genset grouping the roles",
                    suggest_genset(general, &group.specifics, false, false),
                ));
            }
            Some(genset) => {
                if genset.disjoint {
                    builder.violation(Violation::error(
                        codes::DISJOINT_ROLE_GENSET,
                        format!(
                            "Role genset '{}' must not be 'disjoint': roles of '{general}' can overlap",
                            genset.name
                        ),
                    ));
                    builder.suggestion(Suggestion::new(
                        SuggestionAction::RemoveKeyword,
                        "Remove 'disjoint' keyword from genset",
                        rewrite_genset(genset, &genset.specifics, false, genset.complete),
                    ));
                }
                check_genset_covers(builder, genset, &group.specifics, "roles");
            }
        }

        for role in &group.specifics {
            let gensets = group.table.gensets_with_specific(role);
            if gensets.len() > 1 {
                let names: Vec<&str> = gensets.iter().map(|g| g.name.as_str()).collect();
                builder.violation(Violation::info(
                    codes::ROLE_IN_MULTIPLE_GENSETS,
                    format!(
                        "Role '{role}' appears in {} gensets: {}",
                        gensets.len(),
                        names.join(", ")
                    ),
                ));
            }
            if group.table.relations_involving(role).is_empty() {
                builder.violation(Violation::info(
                    codes::ROLE_WITHOUT_RELATION,
                    format!("Role '{role}' takes part in no relation"),
                ));
            }
        }
    }
}
