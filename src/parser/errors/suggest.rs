//! "Did you mean ..." recommendations for syntax errors.
//!
//! Three sources are consulted in order: a table of common misspellings,
//! a bounded edit-distance match against the vocabularies the parser was
//! expecting, and naming-convention hints.

use crate::core::text_utils::{closest_match, is_identifier};
use crate::parser::TokenKind;

use super::expected::Expectation;

/// Frequent misspellings and foreign-language habits, mapped to the Tonto word
pub const COMMON_TYPOS: &[(&str, &str)] = &[
    ("sbukind", "subkind"),
    ("subkin", "subkind"),
    ("subKind", "subkind"),
    ("knd", "kind"),
    ("kidn", "kind"),
    ("genst", "genset"),
    ("gensets", "genset"),
    ("relaton", "relation"),
    ("realtion", "relation"),
    ("disjiont", "disjoint"),
    ("disjont", "disjoint"),
    ("pakage", "package"),
    ("pacakge", "package"),
    ("improt", "import"),
    ("specialize", "specializes"),
    ("specialise", "specializes"),
    ("specialises", "specializes"),
    ("extends", "specializes"),
    ("generals", "general"),
    ("specific", "specifics"),
    ("catgory", "category"),
    ("rolemixin", "roleMixin"),
    ("phasemixin", "phaseMixin"),
    ("mediaton", "mediation"),
    ("characterisation", "characterization"),
    ("externaldependence", "externalDependence"),
    ("enumeration", "enum"),
    ("class", "kind"),
    ("string", "String"),
    ("str", "String"),
    ("int", "Number"),
    ("integer", "Number"),
    ("float", "Number"),
    ("bool", "Boolean"),
    ("boolean", "Boolean"),
    ("date", "Date"),
    ("datetime", "Datetime"),
];

/// Look up a word in [`COMMON_TYPOS`]
pub fn known_typo(word: &str) -> Option<&'static str> {
    COMMON_TYPOS
        .iter()
        .find(|(typo, _)| *typo == word)
        .map(|(_, fix)| *fix)
}

/// Build a recommendation for an unexpected token.
///
/// `found` is `None` at end of input.
pub fn recommend(
    found: Option<(&str, TokenKind)>,
    expected: &[Expectation],
    max_distance: usize,
) -> Option<String> {
    let Some((word, kind)) = found else {
        return expected
            .contains(&Expectation::Token(TokenKind::RBrace))
            .then(|| "Check for a missing '}'".to_string());
    };

    if let Some(fix) = known_typo(word) {
        return Some(format!("Did you mean '{fix}'?"));
    }

    let vocabulary: Vec<&'static str> = expected.iter().flat_map(|e| e.vocabulary()).collect();
    if let Some(fix) = closest_match(word, vocabulary.iter().copied(), max_distance) {
        return Some(format!("Did you mean '{fix}'?"));
    }

    naming_hint(word, kind, expected)
}

fn naming_hint(word: &str, kind: TokenKind, expected: &[Expectation]) -> Option<String> {
    let wants_class_name = expected.contains(&Expectation::ClassName);
    let wants_name = wants_class_name || expected.contains(&Expectation::Name);

    if wants_class_name && kind.is_name() && word.starts_with(|c: char| c.is_lowercase()) {
        return Some(format!(
            "Class names must start with an uppercase letter: '{}'",
            capitalize(word)
        ));
    }
    if wants_name && kind.is_reserved() {
        return Some(format!(
            "'{word}' is a reserved word and cannot be used as a name"
        ));
    }
    if wants_name && kind == TokenKind::Integer {
        return Some("Names cannot start with a digit".to_string());
    }
    if wants_name && kind == TokenKind::String {
        let unquoted = word.trim_matches('"');
        if is_identifier(unquoted) {
            return Some(format!("Names are written without quotes: '{unquoted}'"));
        }
    }
    if expected.contains(&Expectation::Token(TokenKind::At))
        && matches!(kind, TokenKind::RelationStereotype(_))
    {
        return Some(format!("Relation stereotypes are written with '@': '@{word}'"));
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
