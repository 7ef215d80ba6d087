//! RoleMixin pattern: an anti-rigid mixin specialized by roles of different
//! kinds, grouped by a non-disjoint genset.

use smol_str::SmolStr;

use super::genset::{constraints_of, rewrite_genset, suggest_genset};
use super::pattern::{
    PatternBuilder, PatternElements, PatternKind, Suggestion, SuggestionAction, Violation,
};
use super::{Detection, PatternDetector};
use crate::parser::ast::ClassDef;
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

pub struct RoleMixinDetector;

const ALLOWED_SPECIFICS: &[ClassStereotype] = &[ClassStereotype::Role, ClassStereotype::RoleMixin];

/// Stereotypes a roleMixin may itself specialize
const ALLOWED_PARENTS: &[ClassStereotype] = &[
    ClassStereotype::RoleMixin,
    ClassStereotype::Category,
    ClassStereotype::Mixin,
    ClassStereotype::HistoricalRoleMixin,
];

/// Direct children plus declared specifics of gensets over `role_mixin`
fn specifics_of(table: &SymbolTable<'_>, role_mixin: &ClassDef) -> Vec<SmolStr> {
    let mut specifics: Vec<SmolStr> = table
        .children_of(&role_mixin.name, None)
        .iter()
        .map(|c| c.name.clone())
        .collect();
    for genset in table.gensets_with_general(&role_mixin.name) {
        for specific in &genset.specifics {
            if table.class_exists(specific) && !specifics.contains(specific) {
                specifics.push(specific.clone());
            }
        }
    }
    specifics
}

impl PatternDetector for RoleMixinDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::RoleMixin
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        let mut detection = Detection::default();

        for role_mixin in table.classes_by_stereotype(ClassStereotype::RoleMixin) {
            let name = &role_mixin.name;
            let specifics = specifics_of(table, role_mixin);
            let genset = table.gensets_with_general(name).first().copied();

            let mut builder = PatternBuilder::new(
                PatternKind::RoleMixin,
                name,
                role_mixin.stereotype,
                role_mixin.position,
            );
            builder.constraints(constraints_of(genset));

            if specifics.is_empty() {
                builder.violation(Violation::error(
                    codes::ROLEMIXIN_WITHOUT_SPECIFICS,
                    format!("RoleMixin '{name}' has no specifics; it must be specialized by roles"),
                ));
            } else if genset.is_none() {
                builder.violation(Violation::error(
                    codes::MISSING_GENSET,
                    format!("RoleMixin_Pattern for '{name}' requires a genset over its specifics"),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::InsertCode,
                    "Add a genset grouping the roles of the roleMixin",
                    suggest_genset(name, &specifics, false, false),
                ));
            }

            for specific in &specifics {
                let Some(class) = table.class(specific) else {
                    continue;
                };
                if !ALLOWED_SPECIFICS.contains(&class.stereotype) {
                    builder.violation(Violation::error(
                        codes::INVALID_ROLEMIXIN_SPECIFIC,
                        format!(
                            "Specific '{specific}' of roleMixin '{name}' is a {}; expected role or roleMixin",
                            class.stereotype
                        ),
                    ));
                }
            }

            if let Some(genset) = genset.filter(|g| g.disjoint) {
                builder.violation(Violation::warning(
                    codes::DISJOINT_ROLEMIXIN_GENSET,
                    format!(
                        "RoleMixin genset '{}' should not be 'disjoint'; roles of different kinds can overlap",
                        genset.name
                    ),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::RemoveKeyword,
                    "Remove 'disjoint' keyword from genset",
                    rewrite_genset(genset, &genset.specifics, false, genset.complete),
                ));
            }

            for parent in table.parents_of(name) {
                let Some(parent) = table.class(parent) else {
                    continue;
                };
                if !ALLOWED_PARENTS.contains(&parent.stereotype) {
                    builder.violation(Violation::error(
                        codes::INVALID_SPECIALIZATION,
                        format!(
                            "roleMixin '{name}' cannot specialize {} '{}'",
                            parent.stereotype, parent.name
                        ),
                    ));
                }
            }

            detection.patterns.push(builder.build(PatternElements::RoleMixin {
                role_mixin: name.clone(),
                specifics,
                genset: genset.map(|g| g.name.clone()),
            }));
        }

        detection
    }
}
