//! Token kinds produced by the lexer.

use std::borrow::Cow;
use std::fmt;

use super::keywords::{
    ClassStereotype, Keyword, MetaAttribute, Nature, PrimitiveType, RelationStereotype,
};

/// The kind of a lexed token.
///
/// Reserved words carry their vocabulary member; identifier-family tokens
/// are classified by naming convention (see [`super::lexer::WORD_RULES`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================================================
    // DELIMITERS
    // =========================================================================
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Comma,
    Star,
    At,
    Lt,
    Gt,
    /// `..` in cardinalities
    DotDot,

    // =========================================================================
    // RELATION OPERATORS
    // =========================================================================
    /// `--`
    Association,
    /// `-->`
    AssociationRight,
    /// `<--`
    AssociationLeft,
    /// `<-->`
    AssociationBoth,
    /// `<>--`
    AggregationLeft,
    /// `--<>`
    AggregationRight,
    /// `<o>--`
    CompositionLeft,
    /// `--<o>`
    CompositionRight,

    // =========================================================================
    // LITERALS
    // =========================================================================
    String,
    Integer,

    // =========================================================================
    // RESERVED WORDS
    // =========================================================================
    Keyword(Keyword),
    Nature(Nature),
    ClassStereotype(ClassStereotype),
    RelationStereotype(RelationStereotype),
    PrimitiveType(PrimitiveType),
    MetaAttribute(MetaAttribute),

    // =========================================================================
    // IDENTIFIER FAMILY
    // =========================================================================
    /// Uppercase-initial word
    ClassName,
    /// Lowercase-initial letters/underscores
    RelationName,
    /// Lowercase-initial word ending in digits
    InstanceName,
    /// Letters-only word ending in `DataType`
    DatatypeName,
    /// Anything else that looks like a word
    Identifier,
}

impl TokenKind {
    /// Look up a reserved word in every vocabulary
    pub fn reserved(word: &str) -> Option<Self> {
        Keyword::from_text(word)
            .map(Self::Keyword)
            .or_else(|| Nature::from_text(word).map(Self::Nature))
            .or_else(|| ClassStereotype::from_text(word).map(Self::ClassStereotype))
            .or_else(|| RelationStereotype::from_text(word).map(Self::RelationStereotype))
            .or_else(|| PrimitiveType::from_text(word).map(Self::PrimitiveType))
            .or_else(|| MetaAttribute::from_text(word).map(Self::MetaAttribute))
    }

    pub fn is_relation_op(self) -> bool {
        matches!(
            self,
            Self::Association
                | Self::AssociationRight
                | Self::AssociationLeft
                | Self::AssociationBoth
                | Self::AggregationLeft
                | Self::AggregationRight
                | Self::CompositionLeft
                | Self::CompositionRight
        )
    }

    /// Identifier-family token usable as a declaration or reference name
    pub fn is_name(self) -> bool {
        matches!(
            self,
            Self::ClassName
                | Self::RelationName
                | Self::InstanceName
                | Self::DatatypeName
                | Self::Identifier
        )
    }

    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::Keyword(_)
                | Self::Nature(_)
                | Self::ClassStereotype(_)
                | Self::RelationStereotype(_)
                | Self::PrimitiveType(_)
                | Self::MetaAttribute(_)
        )
    }

    /// Source spelling for fixed-text tokens
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Star => "*",
            Self::At => "@",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::DotDot => "..",
            Self::Association => "--",
            Self::AssociationRight => "-->",
            Self::AssociationLeft => "<--",
            Self::AssociationBoth => "<-->",
            Self::AggregationLeft => "<>--",
            Self::AggregationRight => "--<>",
            Self::CompositionLeft => "<o>--",
            Self::CompositionRight => "--<o>",
            Self::Keyword(k) => k.as_str(),
            Self::Nature(n) => n.as_str(),
            Self::ClassStereotype(s) => s.as_str(),
            Self::RelationStereotype(s) => s.as_str(),
            Self::PrimitiveType(p) => p.as_str(),
            Self::MetaAttribute(m) => m.as_str(),
            Self::String
            | Self::Integer
            | Self::ClassName
            | Self::RelationName
            | Self::InstanceName
            | Self::DatatypeName
            | Self::Identifier => return None,
        };
        Some(text)
    }

    /// Stable upper-case type tag used in token dumps (`CLASS_NAME`, `KIND`, `LBRACE`)
    pub fn type_name(self) -> Cow<'static, str> {
        let name = match self {
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Star => "STAR",
            Self::At => "AT",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::DotDot => "CARDINALITY",
            Self::Association => "ASSOCIATION",
            Self::AssociationRight => "ASSOCIATIONR",
            Self::AssociationLeft => "ASSOCIATIONL",
            Self::AssociationBoth => "ASSOCIATIONLR",
            Self::AggregationLeft => "AGGREGATIONL",
            Self::AggregationRight => "AGGREGATIONR",
            Self::CompositionLeft => "COMPOSITIONL",
            Self::CompositionRight => "COMPOSITIONR",
            Self::String => "STRING",
            Self::Integer => "NUMBER",
            Self::ClassName => "CLASS_NAME",
            Self::RelationName => "RELATION_NAME",
            Self::InstanceName => "INSTANCE_NAME",
            Self::DatatypeName => "NEW_DATATYPE",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword(k) => return Cow::Owned(screaming(k.as_str())),
            Self::Nature(n) => return Cow::Owned(screaming(n.as_str())),
            Self::ClassStereotype(s) => return Cow::Owned(screaming(s.as_str())),
            Self::RelationStereotype(s) => return Cow::Owned(screaming(s.as_str())),
            Self::PrimitiveType(p) => return Cow::Owned(screaming(p.as_str())),
            Self::MetaAttribute(m) => return Cow::Owned(screaming(m.as_str())),
        };
        Cow::Borrowed(name)
    }

    /// Human-readable name for error messages
    pub fn display_name(self) -> Cow<'static, str> {
        if let Some(text) = self.fixed_text() {
            return Cow::Owned(format!("'{text}'"));
        }
        Cow::Borrowed(match self {
            Self::String => "string literal",
            Self::Integer => "integer",
            Self::ClassName => "class name",
            Self::RelationName => "relation name",
            Self::InstanceName => "instance name",
            Self::DatatypeName => "datatype name",
            _ => "identifier",
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// `phaseMixin` -> `PHASE_MIXIN`, `functional-complexes` -> `FUNCTIONAL_COMPLEXES`
fn screaming(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    for (i, c) in word.chars().enumerate() {
        if c == '-' {
            out.push('_');
        } else if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
            out.push(c);
        } else {
            out.push(c.to_ascii_uppercase());
        }
    }
    out
}
