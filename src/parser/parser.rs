//! Recursive descent parser for Tonto
//!
//! Builds the typed AST from the token stream. The parser never aborts:
//! every unexpected token becomes a [`SyntaxError`] and parsing resumes at
//! the nearest recovery point of the current [`ParseContext`].

use indexmap::IndexSet;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::ast::File;
use super::errors::{ErrorCode, Expectation, ParseContext, SyntaxError, suggest};
use super::lexer::Token;
use super::token_kind::TokenKind;
use crate::base::{LineIndex, Position, caret_pointer};

/// Default edit distance for "did you mean" matching
pub const DEFAULT_SUGGESTION_DISTANCE: usize = 2;

/// Parse result containing the AST and any errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub file: File,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a token stream. Source lines in diagnostics are rebuilt from tokens.
pub fn parse(tokens: &[Token], filename: &str) -> Parse {
    Parser::new(tokens, filename).run()
}

/// Parse a token stream, quoting source lines from `source` in diagnostics.
pub fn parse_with_source(tokens: &[Token], filename: &str, source: &str) -> Parse {
    Parser::new(tokens, filename).with_source(source).run()
}

/// Where diagnostic line text comes from
enum SourceLines<'t> {
    Text(LineIndex<'t>),
    Tokens,
}

/// The parser state for one parse
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    filename: SmolStr,
    lines: SourceLines<'t>,
    errors: Vec<SyntaxError>,
    /// Everything tested since the last consumed token
    expected: IndexSet<Expectation>,
    contexts: Vec<ParseContext>,
    max_suggestion_distance: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], filename: impl Into<SmolStr>) -> Self {
        Self {
            tokens,
            pos: 0,
            filename: filename.into(),
            lines: SourceLines::Tokens,
            errors: Vec::new(),
            expected: IndexSet::new(),
            contexts: Vec::new(),
            max_suggestion_distance: DEFAULT_SUGGESTION_DISTANCE,
        }
    }

    pub fn with_source(mut self, source: &'t str) -> Self {
        self.lines = SourceLines::Text(LineIndex::new(source));
        self
    }

    pub fn with_max_suggestion_distance(mut self, distance: usize) -> Self {
        self.max_suggestion_distance = distance;
        self
    }

    /// Parse the whole token stream
    pub fn run(mut self) -> Parse {
        let file = self.parse_file();
        tracing::debug!(
            "[PARSER] {}: {} declarations, {} errors",
            self.filename,
            file.content.len(),
            self.errors.len()
        );
        Parse {
            file,
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    pub(crate) fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    pub(crate) fn nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Test for a token kind, recording it as expected
    pub(crate) fn at(&mut self, kind: TokenKind) -> bool {
        self.expected.insert(Expectation::Token(kind));
        self.current_kind() == Some(kind)
    }

    /// Test for a token class, recording it as expected
    pub(crate) fn at_class(&mut self, expectation: Expectation) -> bool {
        self.expected.insert(expectation);
        self.current_kind().is_some_and(|k| expectation.accepts(k))
    }

    pub(crate) fn at_relation_op(&mut self) -> bool {
        for kind in RELATION_OPS {
            self.expected.insert(Expectation::Token(kind));
        }
        self.current_kind().is_some_and(TokenKind::is_relation_op)
    }

    /// Source position of the current token, or just past the last one
    pub(crate) fn current_position(&self) -> Position {
        match self.current().or_else(|| self.tokens.last()) {
            Some(token) if !self.at_eof() => Position::new(token.line, token.column),
            Some(token) => Position::new(
                token.line,
                token.column + token.lexeme.chars().count() as u32,
            ),
            None => Position::new(1, 1),
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    pub(crate) fn bump(&mut self) -> Option<&'t Token> {
        let token = self.current()?;
        tracing::trace!("[PARSER] bump {:?} '{}'", token.kind, token.lexeme);
        self.pos += 1;
        self.expected.clear();
        Some(token)
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report `code`; does not skip anything
    pub(crate) fn expect(&mut self, kind: TokenKind, code: ErrorCode) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(code, format!("expected {}", kind.display_name()));
        false
    }

    /// Consume an identifier-family name
    pub(crate) fn eat_name(&mut self) -> Option<SmolStr> {
        if self.at_class(Expectation::Name) {
            return self.bump().map(|t| t.lexeme.clone());
        }
        None
    }

    /// Consume a name or report `code`
    pub(crate) fn expect_name(&mut self, code: ErrorCode, what: &str) -> Option<SmolStr> {
        let name = self.eat_name();
        if name.is_none() {
            self.error(code, format!("expected {what}"));
        }
        name
    }

    /// Comma-separated names: `A, B, C`
    pub(crate) fn name_list(&mut self, code: ErrorCode, what: &str) -> Vec<SmolStr> {
        let mut names = Vec::new();
        if let Some(first) = self.expect_name(code, what) {
            names.push(first);
        }
        while self.eat(TokenKind::Comma) {
            match self.expect_name(code, what) {
                Some(name) => names.push(name),
                None => break,
            }
        }
        names
    }

    // =========================================================================
    // Contexts
    // =========================================================================

    pub(crate) fn context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    pub(crate) fn in_context<T>(&mut self, ctx: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        self.contexts.push(ctx);
        let result = f(self);
        self.contexts.pop();
        result
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    pub(crate) fn error(&mut self, code: ErrorCode, message: impl Into<String>) {
        let context = self.context();
        let position = self.current_position();
        let token = self.current();
        let expected: IndexSet<String> = self.expected.iter().map(|e| e.to_string()).collect();
        let expected_list: Vec<Expectation> = self.expected.iter().copied().collect();

        let message = match token {
            Some(t) => format!(
                "{} {}, found '{}'",
                message.into(),
                context.description(),
                t.lexeme
            ),
            None => format!("{} {}, found end of input", message.into(), context.description()),
        };
        let range = token
            .map(|t| t.range)
            .or_else(|| self.tokens.last().map(|t| TextRange::empty(t.range.end())))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(0)));

        let mut error = SyntaxError {
            code,
            message,
            token: token.map(|t| t.lexeme.clone()),
            token_type: token
                .map(|t| t.kind.type_name().into_owned())
                .unwrap_or_else(|| "EOF".to_string()),
            line: position.line,
            column: position.column,
            line_text: self.line_text(position.line),
            pointer: caret_pointer(position.column),
            filename: self.filename.clone(),
            expected: Vec::new(),
            recommendation: None,
            context,
            range,
        }
        .with_expected(expected.into_iter().collect());

        if let Some(hint) = suggest::recommend(
            token.map(|t| (t.lexeme.as_str(), t.kind)),
            &expected_list,
            self.max_suggestion_distance,
        ) {
            error = error.with_recommendation(hint);
        }

        tracing::trace!("[PARSER] {}", error.message);
        self.errors.push(error);
    }

    /// Report an error, then skip to a recovery point of the current context
    pub(crate) fn error_recover(&mut self, code: ErrorCode, message: impl Into<String>) {
        self.error(code, message);
        self.recover();
    }

    /// Skip tokens until the current context can resume
    pub(crate) fn recover(&mut self) {
        let context = self.context();
        let mut skipped = false;
        while let Some(kind) = self.current_kind() {
            if context.recovers_at(kind) {
                break;
            }
            // `name:` starts the next attribute
            if skipped
                && matches!(
                    context,
                    ParseContext::ClassBody | ParseContext::Datatype | ParseContext::Attribute
                )
                && kind.is_name()
                && self.nth_kind(1) == Some(TokenKind::Colon)
            {
                break;
            }
            self.bump();
            skipped = true;
        }
    }

    fn line_text(&self, line: u32) -> String {
        match &self.lines {
            SourceLines::Text(index) => index.line_text(line).to_string(),
            SourceLines::Tokens => rebuild_line(self.tokens, line),
        }
    }
}

const RELATION_OPS: [TokenKind; 8] = [
    TokenKind::Association,
    TokenKind::AssociationRight,
    TokenKind::AssociationLeft,
    TokenKind::AssociationBoth,
    TokenKind::AggregationLeft,
    TokenKind::AggregationRight,
    TokenKind::CompositionLeft,
    TokenKind::CompositionRight,
];

/// Approximate a source line by placing each token's lexeme at its column
fn rebuild_line(tokens: &[Token], line: u32) -> String {
    let mut text = String::new();
    let mut width = 0usize;
    for token in tokens.iter().filter(|t| t.line == line) {
        let column = token.column.saturating_sub(1) as usize;
        if column > width {
            text.extend(std::iter::repeat_n(' ', column - width));
            width = column;
        }
        text.push_str(&token.lexeme);
        width += token.lexeme.chars().count();
    }
    text
}
