//! Error code definitions for lexer and parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid characters and literals)
//! - E02xx: Structural errors (braces and brackets)
//! - E03xx: Declaration errors (classes, attributes, datatypes, enums)
//! - E04xx: Relation errors
//! - E05xx: Import/package errors
//! - E06xx: Generalization set errors
//! - E09xx: Generic/fallback errors

use std::fmt;

use serde::{Serialize, Serializer};

/// Error codes for lexer and parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character that starts no token
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Integer literal out of range
    E0104,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed brace `{`
    E0201,
    /// Unclosed bracket `[`
    E0202,
    /// Unexpected closing delimiter
    E0203,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing declaration name
    E0301,
    /// Class name does not start with an uppercase letter
    E0302,
    /// Unexpected token in class body
    E0303,
    /// Missing attribute type
    E0304,
    /// Malformed cardinality
    E0305,
    /// Unexpected token where a declaration should start
    E0306,
    /// Malformed meta-attribute list
    E0307,
    /// Malformed enumeration literal list
    E0308,

    // =========================================================================
    // E04xx: Relation errors
    // =========================================================================
    /// Missing relation operator
    E0401,
    /// Missing relation end
    E0402,
    /// Missing relation stereotype after `@`
    E0403,

    // =========================================================================
    // E05xx: Import/package errors
    // =========================================================================
    /// Missing import module name
    E0501,
    /// Missing package declaration
    E0502,
    /// Package declared more than once
    E0503,

    // =========================================================================
    // E06xx: Generalization set errors
    // =========================================================================
    /// Missing `general` clause
    E0601,
    /// Missing `specifics` clause
    E0602,
    /// Repeated genset modifier
    E0603,
    /// Malformed genset body
    E0604,

    // =========================================================================
    // E09xx: Generic errors
    // =========================================================================
    /// Unexpected token
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            Self::E0308 => "E0308",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            Self::E0901 => "E0901",
        }
    }

    /// Get the category description for this error code
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 => "structural error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307
            | Self::E0308 => "declaration error",
            Self::E0401 | Self::E0402 | Self::E0403 => "relation error",
            Self::E0501 | Self::E0502 | Self::E0503 => "import/package error",
            Self::E0601 | Self::E0602 | Self::E0603 | Self::E0604 => "genset error",
            Self::E0901 => "syntax error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "illegal character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "integer literal out of range",
            Self::E0201 => "unclosed brace",
            Self::E0202 => "unclosed bracket",
            Self::E0203 => "unexpected closing delimiter",
            Self::E0301 => "expected a name",
            Self::E0302 => "class names must start with an uppercase letter",
            Self::E0303 => "unexpected token in class body",
            Self::E0304 => "expected an attribute type",
            Self::E0305 => "malformed cardinality",
            Self::E0306 => "expected a declaration",
            Self::E0307 => "malformed meta-attribute list",
            Self::E0308 => "malformed enumeration literals",
            Self::E0401 => "expected a relation operator",
            Self::E0402 => "expected a relation end",
            Self::E0403 => "expected a relation stereotype after '@'",
            Self::E0501 => "expected a module name",
            Self::E0502 => "missing package declaration",
            Self::E0503 => "package already declared",
            Self::E0601 => "genset is missing its 'general' clause",
            Self::E0602 => "genset is missing its 'specifics' clause",
            Self::E0603 => "repeated genset modifier",
            Self::E0604 => "malformed genset body",
            Self::E0901 => "unexpected token",
        }
    }

    /// True for codes raised by the lexer
    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E01")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
