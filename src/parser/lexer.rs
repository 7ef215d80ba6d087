//! Logos-based lexer for Tonto
//!
//! Logos recognizes punctuation, literals and raw words. Raw words are then
//! classified by [`WORD_RULES`], an explicit ordered table: the first rule
//! that matches decides the token kind, so rule order is part of the
//! language definition.

use logos::Logos;
use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::errors::{ErrorCode, LexError};
use super::keywords::Nature;
use super::token_kind::TokenKind;
use crate::base::constants::DATATYPE_SUFFIX;
use crate::base::{LineIndex, caret_pointer};

/// Literal value carried by string and integer tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(u64),
    /// String contents without the surrounding quotes
    String(SmolStr),
}

/// A token with its kind, text, literal value and position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type", serialize_with = "serialize_kind")]
    pub kind: TokenKind,
    #[serde(rename = "value")]
    pub lexeme: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Literal>,
    pub line: u32,
    pub column: u32,
    #[serde(skip)]
    pub range: TextRange,
}

impl Token {
    pub fn integer_value(&self) -> Option<u64> {
        match self.literal {
            Some(Literal::Integer(n)) => Some(n),
            _ => None,
        }
    }
}

fn serialize_kind<S: Serializer>(kind: &TokenKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&kind.type_name())
}

// =============================================================================
// WORD CLASSIFICATION
// =============================================================================

/// Classifies a raw word. Receives the word and the source text starting at
/// the word; returns the kind and the byte length actually consumed.
pub type WordMatcher = fn(word: &str, rest: &str) -> Option<(TokenKind, usize)>;

/// Ordered identifier classification rules, first match wins.
pub const WORD_RULES: &[(&str, WordMatcher)] = &[
    ("compound-keyword", match_compound_keyword),
    ("datatype-name", match_datatype_name),
    ("instance-name", match_instance_name),
    ("class-name", match_class_name),
    ("relation-name", match_relation_name),
    ("identifier", match_identifier),
];

/// Classify a word with [`WORD_RULES`].
pub fn classify_word(word: &str, rest: &str) -> (TokenKind, usize) {
    WORD_RULES
        .iter()
        .find_map(|(_, matcher)| matcher(word, rest))
        .unwrap_or((TokenKind::Identifier, word.len()))
}

fn reserved_or(word: &str, fallback: TokenKind) -> Option<(TokenKind, usize)> {
    Some((TokenKind::reserved(word).unwrap_or(fallback), word.len()))
}

/// `functional-complexes`, `intrinsic-modes`, ...: a word joined by hyphens
fn match_compound_keyword(_word: &str, rest: &str) -> Option<(TokenKind, usize)> {
    Nature::ALL
        .iter()
        .filter(|n| n.as_str().contains('-'))
        .find(|n| {
            let text = n.as_str();
            rest.starts_with(text)
                && !rest[text.len()..].starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
        })
        .map(|n| (TokenKind::Nature(*n), n.as_str().len()))
}

/// `[a-zA-Z]+DataType`
fn match_datatype_name(word: &str, _rest: &str) -> Option<(TokenKind, usize)> {
    let prefix = word.strip_suffix(DATATYPE_SUFFIX)?;
    if prefix.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    reserved_or(word, TokenKind::DatatypeName)
}

/// `[a-z][a-zA-Z_]*[0-9]+`, never reserved
fn match_instance_name(word: &str, _rest: &str) -> Option<(TokenKind, usize)> {
    let stem = word.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == word.len() || !stem.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    stem.chars()
        .all(|c| c.is_ascii_alphabetic() || c == '_')
        .then_some((TokenKind::InstanceName, word.len()))
}

/// `[A-Z][a-zA-Z0-9_]*`
fn match_class_name(word: &str, _rest: &str) -> Option<(TokenKind, usize)> {
    if !word.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    if !word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    reserved_or(word, TokenKind::ClassName)
}

/// `[a-z][a-zA-Z_]*`
fn match_relation_name(word: &str, _rest: &str) -> Option<(TokenKind, usize)> {
    if !word.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    reserved_or(word, TokenKind::RelationName)
}

fn match_identifier(word: &str, _rest: &str) -> Option<(TokenKind, usize)> {
    reserved_or(word, TokenKind::Identifier)
}

// =============================================================================
// LEXER SESSION
// =============================================================================

/// Output of one lexing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lexer session wrapping the logos-generated tokenizer.
///
/// Owns the error buffer for one input; [`Lexer::reset`] starts a fresh run.
pub struct Lexer<'a> {
    source: &'a str,
    filename: SmolStr,
    inner: logos::Lexer<'a, LogosToken>,
    /// Byte offset of `inner`'s input within `source`
    base: usize,
    line_index: LineIndex<'a>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, filename: impl Into<SmolStr>) -> Self {
        Self {
            source,
            filename: filename.into(),
            inner: LogosToken::lexer(source),
            base: 0,
            line_index: LineIndex::new(source),
            errors: Vec::new(),
        }
    }

    /// Discard all session state and start over on `source`
    pub fn reset(&mut self, source: &'a str) {
        self.source = source;
        self.inner = LogosToken::lexer(source);
        self.base = 0;
        self.line_index = LineIndex::new(source);
        self.errors.clear();
    }

    /// Errors recorded so far in this run
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Lex the whole input
    pub fn tokenize(mut self) -> LexOutput {
        let tokens: Vec<Token> = self.by_ref().collect();
        tracing::debug!(
            "[LEXER] {}: {} tokens, {} errors",
            self.filename,
            tokens.len(),
            self.errors.len()
        );
        LexOutput {
            tokens,
            errors: self.errors,
        }
    }

    fn make_token(&self, kind: TokenKind, start: usize, end: usize) -> Token {
        let lexeme = &self.source[start..end];
        let position = self.line_index.position(TextSize::new(start as u32));
        let literal = match kind {
            TokenKind::String => Some(Literal::String(SmolStr::new(
                &lexeme[1..lexeme.len() - 1],
            ))),
            TokenKind::Integer => lexeme.parse::<u64>().ok().map(Literal::Integer),
            _ => None,
        };
        Token {
            kind,
            lexeme: SmolStr::new(lexeme),
            literal,
            line: position.line,
            column: position.column,
            range: TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32)),
        }
    }

    fn record_error(&mut self, code: ErrorCode, start: usize, character: char) {
        let position = self.line_index.position(TextSize::new(start as u32));
        let message = match code {
            ErrorCode::E0101 => format!(
                "Illegal character '{}' at line {}, column {}",
                character, position.line, position.column
            ),
            _ => format!(
                "{} at line {}, column {}",
                capitalize_first(code.default_message()),
                position.line,
                position.column
            ),
        };
        tracing::trace!("[LEXER] {message}");
        self.errors.push(LexError {
            code,
            character,
            line: position.line,
            column: position.column,
            line_text: self.line_index.line_text(position.line).to_string(),
            pointer: caret_pointer(position.column),
            filename: self.filename.clone(),
            message,
            range: TextRange::at(
                TextSize::new(start as u32),
                TextSize::new(character.len_utf8() as u32),
            ),
        });
    }

    /// Restart the logos lexer at an absolute byte offset
    fn restart_at(&mut self, offset: usize) {
        let offset = offset.min(self.source.len());
        self.base = offset;
        self.inner = LogosToken::lexer(&self.source[offset..]);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let logos_token = self.inner.next()?;
            let span = self.inner.span();
            let start = self.base + span.start;
            let end = self.base + span.end;

            match logos_token {
                Ok(LogosToken::Word) => {
                    let word = &self.source[start..end];
                    let (kind, len) = classify_word(word, &self.source[start..]);
                    if len > word.len() {
                        self.inner.bump(len - word.len());
                    }
                    return Some(self.make_token(kind, start, start + len));
                }
                Ok(LogosToken::Integer) => {
                    let token = self.make_token(TokenKind::Integer, start, end);
                    if token.literal.is_none() {
                        let first = self.source[start..].chars().next().unwrap_or('0');
                        self.record_error(ErrorCode::E0104, start, first);
                    }
                    return Some(token);
                }
                Ok(t) => {
                    if let Some(kind) = t.kind() {
                        return Some(self.make_token(kind, start, end));
                    }
                }
                Err(()) => {
                    let rest = &self.source[start..];
                    let Some(character) = rest.chars().next() else {
                        return None;
                    };
                    if rest.starts_with("/*") {
                        // Nothing after an unterminated comment is code
                        self.record_error(ErrorCode::E0103, start, character);
                        self.restart_at(self.source.len());
                        continue;
                    }
                    let code = if character == '"' {
                        ErrorCode::E0102
                    } else {
                        ErrorCode::E0101
                    };
                    self.record_error(code, start, character);
                    self.restart_at(start + character.len_utf8());
                }
            }
        }
    }
}

/// Lex `source` in a fresh session
pub fn tokenize(source: &str, filename: &str) -> LexOutput {
    Lexer::new(source, filename).tokenize()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Logos token enum - words are refined by [`WORD_RULES`]
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum LogosToken {
    // =========================================================================
    // RELATION OPERATORS (longest match wins)
    // =========================================================================
    #[token("<-->")]
    AssociationBoth,

    #[token("<--")]
    AssociationLeft,

    #[token("-->")]
    AssociationRight,

    #[token("--")]
    Association,

    #[token("<>--")]
    AggregationLeft,

    #[token("--<>")]
    AggregationRight,

    #[token("<o>--")]
    CompositionLeft,

    #[token("--<o>")]
    CompositionRight,

    // =========================================================================
    // DELIMITERS
    // =========================================================================
    #[token("..")]
    DotDot,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("*")]
    Star,

    #[token("@")]
    At,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""[^"\n]*""#)]
    String,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
}

impl LogosToken {
    /// Token kind for everything except words, which need classification
    fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            Self::AssociationBoth => TokenKind::AssociationBoth,
            Self::AssociationLeft => TokenKind::AssociationLeft,
            Self::AssociationRight => TokenKind::AssociationRight,
            Self::Association => TokenKind::Association,
            Self::AggregationLeft => TokenKind::AggregationLeft,
            Self::AggregationRight => TokenKind::AggregationRight,
            Self::CompositionLeft => TokenKind::CompositionLeft,
            Self::CompositionRight => TokenKind::CompositionRight,
            Self::DotDot => TokenKind::DotDot,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Colon => TokenKind::Colon,
            Self::Comma => TokenKind::Comma,
            Self::Star => TokenKind::Star,
            Self::At => TokenKind::At,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::String => TokenKind::String,
            Self::Integer => TokenKind::Integer,
            Self::Word => return None,
        };
        Some(kind)
    }
}
