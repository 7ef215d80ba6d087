//! Mode pattern: a mode characterizing one entity and externally depending
//! on another. Modes never take part in generalization sets.

use smol_str::SmolStr;

use super::pattern::{
    PatternBuilder, PatternElements, PatternKind, Suggestion, SuggestionAction, Violation,
};
use super::{Detection, PatternDetector};
use crate::parser::keywords::{ClassStereotype, RelationStereotype};
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

pub struct ModeDetector;

/// Opposite ends of the relations of `stereotype` touching `mode`
fn linked(table: &SymbolTable<'_>, mode: &str, stereotype: RelationStereotype) -> Vec<SmolStr> {
    let mut ends: Vec<SmolStr> = Vec::new();
    for relation in table.relations_involving(mode) {
        if !relation.has_stereotype(stereotype) {
            continue;
        }
        let other = if relation.source() == mode {
            relation.target()
        } else {
            relation.source()
        };
        if !ends.contains(other) {
            ends.push(other.clone());
        }
    }
    ends
}

impl PatternDetector for ModeDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Mode
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        let mut detection = Detection::default();

        for mode in table.classes_by_stereotype(ClassStereotype::Mode) {
            let name = &mode.name;
            let mut builder =
                PatternBuilder::new(PatternKind::Mode, name, mode.stereotype, mode.position);

            let characterizes = linked(table, name, RelationStereotype::Characterization);
            let depends_on = linked(table, name, RelationStereotype::ExternalDependence);

            if characterizes.is_empty() {
                builder.violation(Violation::error(
                    codes::MODE_WITHOUT_CHARACTERIZATION,
                    format!("Mode '{name}' must characterize some class"),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::InsertCode,
                    format!("Add a @characterization relation to '{name}'"),
                    "@characterization [1..*] -- [1] CharacterizedClass",
                ));
            }
            if depends_on.is_empty() {
                builder.violation(Violation::error(
                    codes::MODE_WITHOUT_EXTERNAL_DEPENDENCE,
                    format!("Mode '{name}' must have an external dependence"),
                ));
                builder.suggestion(Suggestion::new(
                    SuggestionAction::InsertCode,
                    format!("Add an @externalDependence relation to '{name}'"),
                    "@externalDependence [1..*] -- [1] DependedClass",
                ));
            }

            for genset in table.gensets() {
                if genset.general == *name || genset.has_specific(name) {
                    builder.violation(Violation::error(
                        codes::MODE_IN_GENSET,
                        format!("Mode '{name}' must not appear in genset '{}'", genset.name),
                    ));
                }
            }

            detection.patterns.push(builder.build(PatternElements::Mode {
                mode: name.clone(),
                characterizes,
                depends_on,
            }));
        }

        detection
    }
}
