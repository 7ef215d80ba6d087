//! Shared driver for the Subkind, Role and Phase patterns.
//!
//! Each of the three groups the children of one stereotype under their
//! parent. A parent of an allowed stereotype with two or more children forms
//! a pattern; a single child is reported as a standalone finding. A parent of
//! a forbidden stereotype yields a pattern carrying INVALID_SPECIALIZATION
//! errors, whatever the number of children.

use smol_str::SmolStr;

use super::genset::{constraints_of, find_matching_genset};
use super::pattern::{PatternBuilder, PatternElements, PatternKind, Violation};
use super::Detection;
use crate::parser::ast::{ClassDef, Genset};
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::{Diagnostic, codes};
use crate::semantic::symbol_table::SymbolTable;

/// One parent with its children of the grouped stereotype
pub struct Group<'t, 'a> {
    pub table: &'t SymbolTable<'a>,
    pub general: &'a ClassDef,
    pub specifics: Vec<SmolStr>,
    pub genset: Option<&'a Genset>,
}

impl Group<'_, '_> {
    pub fn general_name(&self) -> &SmolStr {
        &self.general.name
    }
}

/// Stereotype tables and rules of one specialization pattern
pub trait SpecializationRules {
    const KIND: PatternKind;
    /// Stereotype of the grouped children
    const CHILD: ClassStereotype;
    const ALLOWED_PARENTS: &'static [ClassStereotype];
    const FORBIDDEN_PARENTS: &'static [ClassStereotype];

    /// Add the pattern-specific violations for a group of two or more
    fn check(&self, group: &Group<'_, '_>, builder: &mut PatternBuilder);

    /// Findings outside any pattern; `grouped` lists children already in one
    fn standalone(&self, _table: &SymbolTable<'_>, _grouped: &[SmolStr]) -> Vec<Diagnostic> {
        Vec::new()
    }
}

pub fn detect_specializations<R: SpecializationRules>(
    rules: &R,
    table: &SymbolTable<'_>,
) -> Detection {
    let mut detection = Detection::default();
    let mut grouped = Vec::new();
    let child = R::CHILD.as_str();

    for parent in table.classes() {
        let children = table.children_of(&parent.name, Some(R::CHILD));
        if children.is_empty() {
            continue;
        }
        let specifics: Vec<SmolStr> = children.iter().map(|c| c.name.clone()).collect();

        if R::FORBIDDEN_PARENTS.contains(&parent.stereotype) {
            let mut builder =
                PatternBuilder::new(R::KIND, &parent.name, parent.stereotype, parent.position);
            for name in &specifics {
                builder.violation(Violation::error(
                    codes::INVALID_SPECIALIZATION,
                    format!(
                        "{child} '{name}' cannot specialize {} '{}'",
                        parent.stereotype, parent.name
                    ),
                ));
            }
            let genset = find_matching_genset(table, &parent.name, &specifics);
            builder.constraints(constraints_of(genset));
            detection.patterns.push(builder.build(PatternElements::Specialization {
                general: parent.name.clone(),
                specifics,
                genset: genset.map(|g| g.name.clone()),
            }));
            continue;
        }

        if !R::ALLOWED_PARENTS.contains(&parent.stereotype) {
            continue;
        }

        if let [only] = specifics.as_slice() {
            detection.findings.push(
                Diagnostic::warning(
                    codes::SINGLE_SPECIALIZATION,
                    format!(
                        "'{}' has a single {child} '{only}'; a generalization needs at least two specifics",
                        parent.name
                    ),
                )
                .with_position(parent.position),
            );
            continue;
        }

        let genset = find_matching_genset(table, &parent.name, &specifics);
        let mut builder =
            PatternBuilder::new(R::KIND, &parent.name, parent.stereotype, parent.position);
        builder.constraints(constraints_of(genset));
        let group = Group {
            table,
            general: parent,
            specifics,
            genset,
        };
        rules.check(&group, &mut builder);
        grouped.extend(group.specifics.iter().cloned());

        detection.patterns.push(builder.build(PatternElements::Specialization {
            general: parent.name.clone(),
            specifics: group.specifics,
            genset: genset.map(|g| g.name.clone()),
        }));
    }

    detection.findings.extend(rules.standalone(table, &grouped));
    detection
}
