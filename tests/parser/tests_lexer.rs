#![allow(clippy::unwrap_used)]

use tonto::keywords::{Nature, PrimitiveType};
use tonto::parser::{ErrorCode, TokenKind, tokenize};

use crate::helpers::analysis_helpers::analyze_default;
use crate::helpers::source_fixtures::CAR_RENTAL;

#[test]
fn test_full_model_lexes_cleanly() {
    let out = tokenize(CAR_RENTAL, "car_rental.tonto");
    assert!(out.errors.is_empty(), "{:?}", out.errors);

    let kinds: Vec<TokenKind> = out.tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Nature(Nature::FunctionalComplexes)));
    assert!(kinds.contains(&TokenKind::PrimitiveType(PrimitiveType::Date)));

    let address = out
        .tokens
        .iter()
        .find(|t| t.lexeme == "AddressDataType")
        .unwrap();
    assert_eq!(address.kind, TokenKind::DatatypeName);
}

#[test]
fn test_token_lines_follow_source() {
    let out = tokenize(CAR_RENTAL, "car_rental.tonto");
    let lines: Vec<u32> = out.tokens.iter().map(|t| t.line).collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(out.tokens[0].line, 1);
    assert_eq!(out.tokens[0].column, 1);
}

#[test]
fn test_illegal_character_does_not_stop_lexing() {
    let result = analyze_default("package P\nkind Person $\nkind Car\n");

    assert_eq!(result.lex_errors.len(), 1);
    assert_eq!(result.lex_errors[0].line, 2);
    assert_eq!(result.lex_errors[0].column, 13);
    assert_eq!(result.errors[0].code, ErrorCode::E0101.as_str());

    // Tokens after the bad character are still produced
    assert!(result.tokens.iter().any(|t| t.lexeme == "Car"));
    assert_eq!(result.ast.classes().count(), 2);
    assert!(result.semantic_skipped);
}

#[test]
fn test_reserved_words_cannot_be_class_names() {
    let out = tokenize("kind Number", "t.tonto");
    assert_eq!(
        out.tokens[1].kind,
        TokenKind::PrimitiveType(PrimitiveType::Number)
    );
}
