//! Parse context tracking for context-aware error messages
//!
//! The parser keeps a stack of contexts so an error can say where in the
//! source structure it happened and where recovery may resume.

use serde::Serialize;

use crate::parser::TokenKind;
use crate::parser::keywords::Keyword;

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseContext {
    /// Between top-level declarations
    #[default]
    TopLevel,
    /// Parsing an `import` statement
    Import,
    /// Parsing a `package` statement
    Package,
    /// Parsing a class header (stereotype, name, natures, specialization)
    ClassDeclaration,
    /// Inside a class body `{ ... }`
    ClassBody,
    /// Parsing an attribute declaration
    Attribute,
    /// Parsing a meta-attribute list `{ const, ordered }`
    MetaAttributes,
    /// Parsing a cardinality `[...]`
    Cardinality,
    /// Parsing a relation declared inside a class body
    InternalRelation,
    /// Parsing a top-level `relation`
    ExternalRelation,
    /// Parsing a genset header
    Genset,
    /// Inside a genset body `{ general ... specifics ... }`
    GensetBody,
    /// Parsing a datatype declaration
    Datatype,
    /// Parsing an enumeration
    Enum,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::Import => "in import statement",
            Self::Package => "in package declaration",
            Self::ClassDeclaration => "in class declaration",
            Self::ClassBody => "in class body",
            Self::Attribute => "in attribute declaration",
            Self::MetaAttributes => "in meta-attribute list",
            Self::Cardinality => "in cardinality",
            Self::InternalRelation => "in relation",
            Self::ExternalRelation => "in relation declaration",
            Self::Genset => "in genset declaration",
            Self::GensetBody => "in genset body",
            Self::Datatype => "in datatype declaration",
            Self::Enum => "in enum declaration",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a class, datatype, enum, genset, or relation declaration",
            Self::Import => "a module name",
            Self::Package => "a package name",
            Self::ClassDeclaration => "a class name, 'of', 'specializes', or '{'",
            Self::ClassBody => "an attribute (name: Type) or a relation",
            Self::Attribute => "an attribute type",
            Self::MetaAttributes => "a meta-attribute (ordered, const, derived, subsets, redefines)",
            Self::Cardinality => "a cardinality (e.g., 1, 0..*, 1..5)",
            Self::InternalRelation | Self::ExternalRelation => {
                "a relation operator (--, -->, <>--, <o>--, ...) followed by a class name"
            }
            Self::Genset => "'genset', a genset name, '{', or 'where'",
            Self::GensetBody => "'general', 'categorizer', or 'specifics'",
            Self::Datatype => "a datatype name or attribute",
            Self::Enum => "an enumeration literal",
        }
    }

    /// Whether error recovery in this context may stop at `kind`
    pub fn recovers_at(&self, kind: TokenKind) -> bool {
        let starts_declaration = is_declaration_start(kind);
        match self {
            Self::TopLevel | Self::Import | Self::Package => starts_declaration,
            Self::ClassDeclaration => starts_declaration || matches!(kind, TokenKind::LBrace),
            Self::Datatype => {
                starts_declaration || matches!(kind, TokenKind::LBrace | TokenKind::RBrace)
            }
            Self::ClassBody => {
                starts_declaration
                    || kind.is_relation_op()
                    || matches!(kind, TokenKind::RBrace | TokenKind::At | TokenKind::LBracket)
            }
            Self::Attribute | Self::InternalRelation => {
                starts_declaration || matches!(kind, TokenKind::RBrace | TokenKind::At)
            }
            Self::MetaAttributes => {
                starts_declaration || matches!(kind, TokenKind::Comma | TokenKind::RBrace)
            }
            Self::Cardinality => {
                starts_declaration || matches!(kind, TokenKind::RBracket | TokenKind::RBrace)
            }
            Self::ExternalRelation => starts_declaration,
            Self::Genset => starts_declaration || matches!(kind, TokenKind::LBrace),
            Self::GensetBody => {
                starts_declaration
                    || matches!(
                        kind,
                        TokenKind::RBrace
                            | TokenKind::Keyword(
                                Keyword::General | Keyword::Specifics | Keyword::Categorizer
                            )
                    )
            }
            Self::Enum => {
                starts_declaration || matches!(kind, TokenKind::Comma | TokenKind::RBrace)
            }
        }
    }
}

/// Tokens that can only begin a top-level declaration
pub fn is_declaration_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::ClassStereotype(_)
            | TokenKind::Keyword(
                Keyword::Import
                    | Keyword::Package
                    | Keyword::Genset
                    | Keyword::Disjoint
                    | Keyword::Complete
                    | Keyword::Relation
                    | Keyword::Datatype
                    | Keyword::Enum
            )
    )
}
