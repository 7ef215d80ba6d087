//! Lexer and parser error handling
//!
//! This module provides the error records and helpers for recoverable
//! lexical and syntax errors:
//! - Categorized error codes for filtering and documentation
//! - Context-aware messages and recovery points
//! - Expected-token tracking and "did you mean" recommendations

mod codes;
mod context;
mod error;
mod expected;
pub mod suggest;

pub use codes::ErrorCode;
pub use context::{ParseContext, is_declaration_start};
pub use error::{LexError, SourceDiagnostic, SyntaxError};
pub use expected::Expectation;
