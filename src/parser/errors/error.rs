//! Lexical and syntax error records
//!
//! Both carry what a terminal report needs without going back to the source:
//! - Error code for categorization
//! - 1-based line/column plus the raw source line and a caret pointer
//! - For syntax errors, the expected tokens and an optional "did you mean" hint

use serde::Serialize;
use smol_str::SmolStr;
use text_size::TextRange;

use super::codes::ErrorCode;
use super::context::ParseContext;

/// An unrecognized character (or malformed literal) found while lexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    pub code: ErrorCode,
    /// The offending character
    pub character: char,
    pub line: u32,
    pub column: u32,
    pub line_text: String,
    pub pointer: String,
    pub filename: SmolStr,
    pub message: String,
    #[serde(skip)]
    pub range: TextRange,
}

impl LexError {
    /// Diagnostic type tag (`IllegalCharacter`, `UnterminatedString`, ...)
    pub fn kind_name(&self) -> &'static str {
        match self.code {
            ErrorCode::E0102 => "UnterminatedString",
            ErrorCode::E0103 => "UnterminatedComment",
            ErrorCode::E0104 => "InvalidNumber",
            _ => "IllegalCharacter",
        }
    }

    pub fn to_diagnostic(&self) -> SourceDiagnostic {
        SourceDiagnostic {
            kind: self.kind_name(),
            code: self.code,
            message: self.message.clone(),
            line: self.line,
            column: self.column,
            line_text: self.line_text.clone(),
            pointer: self.pointer.clone(),
            filename: self.filename.clone(),
            expected: None,
            recommendation: None,
        }
    }
}

/// A syntax error with location, expectations and a fix hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Lexeme of the offending token, `None` at end of input
    pub token: Option<SmolStr>,
    /// Type tag of the offending token (`CLASS_NAME`, `LBRACE`, `EOF`)
    pub token_type: String,
    pub line: u32,
    pub column: u32,
    pub line_text: String,
    pub pointer: String,
    pub filename: SmolStr,
    /// Token classes that would have been accepted here
    pub expected: Vec<String>,
    /// "Did you mean ..." or naming hint
    pub recommendation: Option<String>,
    pub context: ParseContext,
    #[serde(skip)]
    pub range: TextRange,
}

impl SyntaxError {
    /// Add expected token descriptions
    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = expected;
        self
    }

    /// Add a fix recommendation
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!(
            "{}: {} at {}:{}:{}",
            self.code, self.message, self.filename, self.line, self.column
        );
        if !self.line_text.is_empty() {
            result.push_str(&format!("\n  {}\n  {}", self.line_text, self.pointer));
        }
        if !self.expected.is_empty() {
            result.push_str(&format!("\n  expected: {}", self.expected.join(", ")));
        }
        if let Some(hint) = &self.recommendation {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }

    pub fn to_diagnostic(&self) -> SourceDiagnostic {
        SourceDiagnostic {
            kind: "SyntaxError",
            code: self.code,
            message: self.message.clone(),
            line: self.line,
            column: self.column,
            line_text: self.line_text.clone(),
            pointer: self.pointer.clone(),
            filename: self.filename.clone(),
            expected: Some(self.expected.clone()),
            recommendation: self.recommendation.clone(),
        }
    }
}

/// Shape shared by lexical and syntax diagnostics for external consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDiagnostic {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub line_text: String,
    pub pointer: String,
    pub filename: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}
