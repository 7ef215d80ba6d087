//! What the parser was prepared to accept at a given position.

use std::fmt;

use crate::parser::TokenKind;
use crate::parser::keywords::{ClassStereotype, MetaAttribute, Nature, RelationStereotype};

/// One entry of the parser's expected-token set.
///
/// Every token test the parser performs since the last consumed token is
/// recorded, so the set at an error is exactly what the grammar would have
/// accepted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// A specific token
    Token(TokenKind),
    /// Any class stereotype (`kind`, `role`, ...)
    ClassStereotype,
    /// Any relation stereotype (`mediation`, `material`, ...)
    RelationStereotype,
    /// Any meta-attribute (`const`, `ordered`, ...)
    MetaAttribute,
    /// Any nature (`functional-complexes`, ...)
    Nature,
    /// Any identifier-family name
    Name,
    /// An uppercase class name
    ClassName,
    /// A primitive type or declared type name
    TypeName,
}

impl Expectation {
    /// Vocabulary words a misspelled token may be matched against
    pub fn vocabulary(&self) -> Vec<&'static str> {
        match self {
            Self::Token(kind) => kind
                .fixed_text()
                .filter(|text| text.chars().all(|c| c.is_ascii_alphabetic() || c == '-'))
                .into_iter()
                .collect(),
            Self::ClassStereotype => ClassStereotype::words().collect(),
            Self::RelationStereotype => RelationStereotype::words().collect(),
            Self::MetaAttribute => MetaAttribute::words().collect(),
            Self::Nature => Nature::words().collect(),
            Self::TypeName => crate::parser::keywords::PrimitiveType::words().collect(),
            Self::Name | Self::ClassName => Vec::new(),
        }
    }

    /// Whether a token of `kind` satisfies this expectation
    pub fn accepts(&self, kind: TokenKind) -> bool {
        match self {
            Self::Token(expected) => *expected == kind,
            Self::ClassStereotype => matches!(kind, TokenKind::ClassStereotype(_)),
            Self::RelationStereotype => matches!(kind, TokenKind::RelationStereotype(_)),
            Self::MetaAttribute => matches!(kind, TokenKind::MetaAttribute(_)),
            Self::Nature => matches!(kind, TokenKind::Nature(_)),
            Self::Name => kind.is_name(),
            Self::ClassName => kind == TokenKind::ClassName,
            Self::TypeName => kind.is_name() || matches!(kind, TokenKind::PrimitiveType(_)),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{}", kind.display_name()),
            Self::ClassStereotype => f.write_str("class stereotype"),
            Self::RelationStereotype => f.write_str("relation stereotype"),
            Self::MetaAttribute => f.write_str("meta-attribute"),
            Self::Nature => f.write_str("nature"),
            Self::Name => f.write_str("name"),
            Self::ClassName => f.write_str("class name"),
            Self::TypeName => f.write_str("type name"),
        }
    }
}
