//! Cross-cutting checks run once per file, independent of the patterns.
//!
//! They cover name resolution (parents, attribute types, relation ends,
//! genset members), genset shape, cardinality bounds and duplicate names.

use crate::base::Position;
use crate::parser::ast::{Attribute, Cardinality};
use crate::semantic::diagnostics::{Diagnostic, DiagnosticCollector, codes};
use crate::semantic::symbol_table::SymbolTable;

/// Run every check over `table`, in declaration order per check
pub fn check(table: &SymbolTable<'_>) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    check_duplicates(table, &mut collector);
    check_parents(table, &mut collector);
    check_attributes(table, &mut collector);
    check_relations(table, &mut collector);
    check_gensets(table, &mut collector);
    tracing::debug!("[CHECKS] {} diagnostics", collector.len());
    collector.finish()
}

fn check_duplicates(table: &SymbolTable<'_>, collector: &mut DiagnosticCollector) {
    for duplicate in table.duplicates() {
        collector.error(
            codes::DUPLICATE_DECLARATION,
            format!(
                "{} '{}' is already declared at {}; this declaration replaces it",
                duplicate.kind, duplicate.name, duplicate.first
            ),
            duplicate.second,
        );
    }
}

fn check_parents(table: &SymbolTable<'_>, collector: &mut DiagnosticCollector) {
    for class in table.classes() {
        for parent in class.parents() {
            if !table.class_exists(parent) {
                collector.error(
                    codes::UNDEFINED_PARENT,
                    format!("Class '{}' specializes undeclared class '{parent}'", class.name),
                    class.position,
                );
            }
        }
    }
    for datatype in table.datatypes() {
        let parents = datatype.specialization.iter().flat_map(|s| &s.parents);
        for parent in parents {
            if table.resolve_type(parent).is_none() {
                collector.error(
                    codes::UNDEFINED_PARENT,
                    format!(
                        "Datatype '{}' specializes undeclared type '{parent}'",
                        datatype.name
                    ),
                    datatype.position,
                );
            }
        }
    }
}

fn check_cardinality(
    collector: &mut DiagnosticCollector,
    cardinality: Option<Cardinality>,
    what: &str,
    position: Position,
) {
    if let Some(cardinality) = cardinality.filter(Cardinality::is_inverted) {
        collector.error(
            codes::INVALID_CARDINALITY,
            format!("Cardinality {cardinality} of {what} has a lower bound above its upper bound"),
            position,
        );
    }
}

fn check_attribute(
    table: &SymbolTable<'_>,
    collector: &mut DiagnosticCollector,
    owner: &str,
    attribute: &Attribute,
) {
    if table.resolve_type(&attribute.type_ref).is_none() {
        collector.error(
            codes::UNRESOLVED_TYPE,
            format!(
                "Attribute '{owner}.{}' has unknown type '{}'",
                attribute.name, attribute.type_ref
            ),
            attribute.position,
        );
    }
    check_cardinality(
        collector,
        attribute.cardinality,
        &format!("attribute '{owner}.{}'", attribute.name),
        attribute.position,
    );
}

fn check_attributes(table: &SymbolTable<'_>, collector: &mut DiagnosticCollector) {
    for class in table.classes() {
        for attribute in class.attributes() {
            check_attribute(table, collector, &class.name, attribute);
        }
    }
    for datatype in table.datatypes() {
        for attribute in datatype.attributes() {
            check_attribute(table, collector, &datatype.name, attribute);
        }
    }
}

fn check_relations(table: &SymbolTable<'_>, collector: &mut DiagnosticCollector) {
    for relation in table.relations() {
        let ends = if relation.is_internal() {
            vec![relation.target()]
        } else {
            vec![relation.source(), relation.target()]
        };
        for end in ends {
            if !table.class_exists(end) {
                collector.error(
                    codes::RELATION_TARGET_NOT_FOUND,
                    format!("Relation end '{end}' is not a declared class"),
                    relation.position(),
                );
            }
        }
        let label = format!("relation {} -> {}", relation.source(), relation.target());
        for cardinality in relation.cardinalities() {
            check_cardinality(collector, cardinality, &label, relation.position());
        }
    }
}

fn check_gensets(table: &SymbolTable<'_>, collector: &mut DiagnosticCollector) {
    for genset in table.gensets() {
        let general_known = !genset.general.is_empty() && table.class_exists(&genset.general);
        if !genset.general.is_empty() && !general_known {
            collector.error(
                codes::UNDEFINED_GENSET_MEMBER,
                format!(
                    "Genset '{}' has undeclared general '{}'",
                    genset.name, genset.general
                ),
                genset.position,
            );
        }

        if genset.specifics.len() == 1 {
            collector.warning(
                codes::GENSET_SINGLE_SPECIFIC,
                format!(
                    "Genset '{}' has a single specific; a generalization set needs at least two",
                    genset.name
                ),
                genset.position,
            );
        }

        for specific in &genset.specifics {
            match table.class(specific) {
                None => collector.error(
                    codes::UNDEFINED_GENSET_MEMBER,
                    format!(
                        "Genset '{}' has undeclared specific '{specific}'",
                        genset.name
                    ),
                    genset.position,
                ),
                Some(class) if general_known && !class.specializes(&genset.general) => {
                    collector.warning(
                        codes::GENSET_SPECIFIC_NOT_CHILD,
                        format!(
                            "'{specific}' is listed in genset '{}' but does not specialize '{}'",
                            genset.name, genset.general
                        ),
                        genset.position,
                    )
                }
                Some(_) => {}
            }
        }
    }
}
