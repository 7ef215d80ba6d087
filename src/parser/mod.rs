//! Lexer and parser for the Tonto ontology language
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind, plus LexErrors
//!     ↓
//! Parser (recursive descent) → typed AST, plus SyntaxErrors
//! ```
//!
//! Neither stage aborts: illegal characters are reported and skipped, and
//! the parser resynchronizes at the recovery points of its current
//! [`errors::ParseContext`]. A file with errors still yields a partial AST.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
mod grammar;
pub mod keywords;
pub mod lexer;
mod token_kind;

pub use errors::{ErrorCode, LexError, ParseContext, SyntaxError};
pub use lexer::{LexOutput, Lexer, Literal, Token, WORD_RULES, tokenize};
pub use parser::{DEFAULT_SUGGESTION_DISTANCE, Parse, Parser, parse, parse_with_source};
pub use token_kind::TokenKind;

/// Everything produced from one source text by the lexer and parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    pub file: ast::File,
    pub errors: Vec<SyntaxError>,
}

impl ParsedSource {
    /// No lexical or syntax errors
    pub fn ok(&self) -> bool {
        self.lex_errors.is_empty() && self.errors.is_empty()
    }
}

/// Lex and parse `source` in one step
pub fn parse_source(source: &str, filename: &str) -> ParsedSource {
    parse_source_with(source, filename, DEFAULT_SUGGESTION_DISTANCE)
}

/// Like [`parse_source`], with a custom "did you mean" edit distance
pub fn parse_source_with(
    source: &str,
    filename: &str,
    max_suggestion_distance: usize,
) -> ParsedSource {
    let LexOutput {
        tokens,
        errors: lex_errors,
    } = tokenize(source, filename);
    let Parse { file, errors } = Parser::new(&tokens, filename)
        .with_source(source)
        .with_max_suggestion_distance(max_suggestion_distance)
        .run();
    ParsedSource {
        tokens,
        lex_errors,
        file,
        errors,
    }
}
