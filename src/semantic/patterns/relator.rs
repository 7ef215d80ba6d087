//! Relator pattern: a relator mediating two or more entities, ideally
//! paired with a material relation between each pair of them.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::pattern::{
    PatternBuilder, PatternElements, PatternKind, Suggestion, SuggestionAction, Violation,
};
use super::{Detection, PatternDetector};
use crate::parser::ast::ClassDef;
use crate::parser::keywords::{ClassStereotype, RelationStereotype};
use crate::semantic::diagnostics::codes;
use crate::semantic::symbol_table::SymbolTable;

pub struct RelatorDetector;

impl PatternDetector for RelatorDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Relator
    }

    fn detect(&self, table: &SymbolTable<'_>) -> Detection {
        let patterns = table
            .classes_by_stereotype(ClassStereotype::Relator)
            .map(|relator| {
                let mut builder = PatternBuilder::new(
                    PatternKind::Relator,
                    &relator.name,
                    relator.stereotype,
                    relator.position,
                );
                let (mediated, material_relations) = check_relator(table, relator, &mut builder);
                builder.build(PatternElements::Relator {
                    relator: relator.name.clone(),
                    mediated,
                    material_relations,
                })
            })
            .collect();
        Detection {
            patterns,
            findings: Vec::new(),
        }
    }
}

/// `Employment` becomes `employment`
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the existing mediated classes and the material relations found
/// between them.
fn check_relator(
    table: &SymbolTable<'_>,
    relator: &ClassDef,
    builder: &mut PatternBuilder,
) -> (Vec<SmolStr>, Vec<SmolStr>) {
    let name = &relator.name;
    let mut seen = FxHashSet::default();
    let mut mediated = Vec::new();

    for relation in table.relations_involving(name) {
        if !relation.has_stereotype(RelationStereotype::Mediation) {
            continue;
        }
        let other = if relation.source() == name {
            relation.target()
        } else {
            relation.source()
        };
        if !seen.insert(other) {
            continue;
        }
        if table.class_exists(other) {
            mediated.push(other.clone());
        } else {
            builder.violation(Violation::error(
                codes::MEDIATION_TARGET_NOT_FOUND,
                format!("Relator '{name}' mediates undeclared class '{other}'"),
            ));
        }
    }

    if mediated.len() < 2 {
        builder.violation(Violation::error(
            codes::INSUFFICIENT_MEDIATIONS,
            format!(
                "Relator '{name}' must mediate at least 2 distinct classes, found {}",
                mediated.len()
            ),
        ));
        builder.suggestion(Suggestion::new(
            SuggestionAction::InsertCode,
            format!("Add a @mediation relation to '{name}'"),
            "@mediation [1..*] -- [1] OtherClass",
        ));
    }

    // Only top-level material relations link the mediated pair
    let materials: Vec<_> = table
        .relations_by_stereotype(RelationStereotype::Material)
        .into_iter()
        .filter(|r| !r.is_internal())
        .collect();
    let mut material_relations = Vec::new();
    let relation_name = lower_first(name);

    for (i, a) in mediated.iter().enumerate() {
        for b in &mediated[i + 1..] {
            match materials.iter().find(|r| r.connects(a, b)) {
                Some(material) => material_relations.push(match material.name() {
                    Some(relation) => relation.clone(),
                    None => SmolStr::new(format!("{}_{}", material.source(), material.target())),
                }),
                None => {
                    builder.violation(Violation::warning(
                        codes::MISSING_MATERIAL_RELATION,
                        format!(
                            "No @material relation between '{a}' and '{b}', which are both mediated by '{name}'"
                        ),
                    ));
                    builder.suggestion(Suggestion::new(
                        SuggestionAction::InsertCode,
                        format!("Add a material relation between '{a}' and '{b}'"),
                        format!(
                            "@material relation {a} [1..*] -- {relation_name} -- [1..*] {b}"
                        ),
                    ));
                }
            }
        }
    }

    (mediated, material_relations)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parser::parse_source;

    fn detect(source: &str) -> Detection {
        let parsed = parse_source(source, "relator.tonto");
        assert!(parsed.ok(), "{:?}", parsed.errors);
        let table = SymbolTable::from_file(&parsed.file);
        RelatorDetector.detect(&table)
    }

    #[rstest]
    #[case("Employment", "employment")]
    #[case("X", "x")]
    #[case("", "")]
    fn test_lower_first(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lower_first(input), expected);
    }

    #[test]
    fn test_complete_relator() {
        let detection = detect(
            "package P\n\
             kind Person\n\
             kind Organization\n\
             relator Employment {\n\
             \x20 @mediation [1..*] -- [1] Person\n\
             \x20 @mediation [1..*] -- [1] Organization\n\
             }\n\
             @material relation Person [1..*] -- worksFor -- [1..*] Organization\n",
        );
        let pattern = &detection.patterns[0];
        assert!(pattern.is_complete(), "{:?}", pattern.violations);
        assert_eq!(
            pattern.elements,
            PatternElements::Relator {
                relator: "Employment".into(),
                mediated: vec!["Person".into(), "Organization".into()],
                material_relations: vec!["worksFor".into()],
            }
        );
    }

    #[test]
    fn test_single_mediation_is_insufficient() {
        let detection =
            detect("package P\nkind Person\nrelator Employment { @mediation [1] -- [1] Person }");
        let pattern = &detection.patterns[0];
        assert!(!pattern.is_complete());
        assert!(pattern.has_violation(codes::INSUFFICIENT_MEDIATIONS));
        assert!(!pattern.has_violation(codes::MISSING_MATERIAL_RELATION));
    }

    #[test]
    fn test_missing_material_relation_snippet() {
        let detection = detect(
            "package P\n\
             kind Person\n\
             kind Organization\n\
             relator Employment {\n\
             \x20 @mediation [1..*] -- [1] Person\n\
             \x20 @mediation [1..*] -- [1] Organization\n\
             }\n",
        );
        let pattern = &detection.patterns[0];
        assert!(pattern.has_violation(codes::MISSING_MATERIAL_RELATION));
        assert_eq!(
            pattern.suggestions[0].code_suggestion,
            "@material relation Person [1..*] -- employment -- [1..*] Organization"
        );
    }

    #[test]
    fn test_internal_material_does_not_link_pair() {
        let detection = detect(
            "package P\n\
             kind Person {\n\
             \x20 @material [1..*] -- worksFor -- [1..*] Organization\n\
             }\n\
             kind Organization\n\
             relator Employment {\n\
             \x20 @mediation [1..*] -- [1] Person\n\
             \x20 @mediation [1..*] -- [1] Organization\n\
             }\n",
        );
        let pattern = &detection.patterns[0];
        assert!(pattern.has_violation(codes::MISSING_MATERIAL_RELATION));
        assert!(!pattern.is_complete());
    }

    #[test]
    fn test_undeclared_and_repeated_targets() {
        let detection = detect(
            "package P\n\
             kind Person\n\
             relator Marriage {\n\
             \x20 @mediation [1] -- [1] Person\n\
             \x20 @mediation [1] -- [1] Person\n\
             \x20 @mediation [1] -- [1] Ghost\n\
             }\n",
        );
        let pattern = &detection.patterns[0];
        assert!(pattern.has_violation(codes::MEDIATION_TARGET_NOT_FOUND));
        assert!(pattern.has_violation(codes::INSUFFICIENT_MEDIATIONS));
    }
}
