//! Foundation types for the Tonto toolchain.
//!
//! This module provides fundamental types used throughout the compiler:
//! - [`Position`] - 1-based line/column positions for tokens and AST nodes
//! - [`LineIndex`] - Byte offset to line/column conversion and line lookup
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - Domain constants (file extension, primitive type names)
//!
//! This module has NO dependencies on other tonto modules.

pub mod constants;
mod position;

pub use position::{LineIndex, Position, caret_pointer};
pub use text_size::{TextRange, TextSize};
