#![allow(clippy::unwrap_used)]

use rstest::rstest;
use tonto::parse_source;
use tonto::parser::ErrorCode;

use crate::helpers::source_fixtures::CAR_RENTAL;

#[test]
fn test_full_model_parses() {
    let parsed = parse_source(CAR_RENTAL, "car_rental.tonto");
    assert!(parsed.ok(), "{:?}", parsed.errors);
    assert_eq!(parsed.file.package_name().map(|p| p.as_str()), Some("CarRental"));
    assert_eq!(parsed.file.imports.len(), 1);
    assert_eq!(parsed.file.classes().count(), 14);
    assert_eq!(parsed.file.gensets().count(), 4);
}

#[test]
fn test_errors_do_not_hide_later_declarations() {
    let source = "package P\n\
        kind Person {\n\
          name String\n\
        }\n\
        kind Car\n\
        subkind SportsCar specializes Car\n";
    let parsed = parse_source(source, "t.tonto");

    assert!(!parsed.errors.is_empty());
    assert!(parsed.errors.iter().all(|e| e.line == 3), "{:?}", parsed.errors);
    let names: Vec<&str> = parsed.file.classes().map(|c| c.name.as_str()).collect();
    assert!(names.ends_with(&["Car", "SportsCar"]), "{names:?}");
}

#[test]
fn test_expected_tokens_are_reported() {
    let parsed = parse_source("package P\nkind Person specializes\n", "t.tonto");
    let err = parsed.errors.first().unwrap();
    assert!(!err.expected.is_empty());
    assert_eq!(err.line, 2);
}

#[test]
fn test_missing_package_is_reported() {
    let parsed = parse_source("kind Person\n", "t.tonto");
    assert_eq!(parsed.errors[0].code, ErrorCode::E0502);
    assert!(parsed.file.package.is_none());
    assert_eq!(parsed.file.classes().count(), 1);
}

#[rstest]
#[case::garbage("}}} ]] -- <>-- @ : , ..")]
#[case::unclosed_everything("package P\nkind A { name: String [1..\nrelator R {\n@mediation [")]
#[case::only_stereotypes("package P\nkind role phase subkind")]
#[case::empty("")]
fn test_parser_terminates_on_malformed_input(#[case] source: &str) {
    let parsed = parse_source(source, "t.tonto");
    assert!(!parsed.ok());
}
