#![allow(clippy::unwrap_used)]

use tonto::keywords::ClassStereotype;
use tonto::parse_source;
use tonto::semantic::SymbolTable;
use tonto::semantic::diagnostics::codes;
use tonto::semantic::symbol_table::ResolvedType;

use crate::helpers::analysis_helpers::analyze_default;
use crate::helpers::source_fixtures::CAR_RENTAL;

#[test]
fn test_duplicate_declaration_keeps_last_and_reports() {
    let source = "package P\nkind Person\nkind Car\nrole Person specializes Car\n";
    let result = analyze_default(source);

    let person = result
        .symbols
        .classes
        .iter()
        .find(|c| c.name == "Person")
        .unwrap();
    assert_eq!(person.stereotype, ClassStereotype::Role);
    assert_eq!(result.symbols.classes.len(), 2);

    let duplicate = result
        .errors
        .iter()
        .find(|e| e.code == codes::DUPLICATE_DECLARATION)
        .unwrap();
    assert!(duplicate.message.contains("Person"));
    assert_eq!(duplicate.line, Some(4));
}

#[test]
fn test_queries_over_full_model() {
    let parsed = parse_source(CAR_RENTAL, "car_rental.tonto");
    let table = SymbolTable::from_file(&parsed.file);

    let roles: Vec<&str> = table
        .classes_by_stereotype(ClassStereotype::Role)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        roles,
        ["Customer", "Employee", "InsuredPerson", "InsuredOrganization"]
    );

    assert_eq!(table.parents_of("InsuredPerson"), ["Person", "Insured"]);
    assert_eq!(table.gensets_with_specific("InsuredPerson").len(), 2);
    assert_eq!(table.gensets_with_general("Car").len(), 2);
    // Mediation, material and plain relation
    assert_eq!(table.relations_involving("Customer").len(), 3);
    assert_eq!(table.internal_relations_of("Damage").len(), 2);
}

#[test]
fn test_type_resolution_order() {
    let parsed = parse_source(CAR_RENTAL, "car_rental.tonto");
    let table = SymbolTable::from_file(&parsed.file);

    assert!(matches!(table.resolve_type("Date"), Some(ResolvedType::Primitive(_))));
    assert!(matches!(table.resolve_type("Person"), Some(ResolvedType::Class(_))));
    assert!(matches!(
        table.resolve_type("AddressDataType"),
        Some(ResolvedType::Datatype(_))
    ));
    assert!(matches!(table.resolve_type("Category"), Some(ResolvedType::Enum(_))));
    assert!(table.resolve_type("Truck").is_none());
}
