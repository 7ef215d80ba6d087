//! # tonto-base
//!
//! Core library for the Tonto ontology language: lexing, parsing, symbol
//! indexing and ontology design pattern detection.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory loading, parallel multi-file analysis
//!   ↓
//! analysis  → Single-file pipeline and serializable results
//!   ↓
//! semantic  → Symbol table, cross-cutting checks, pattern detectors
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! core      → Grammar-agnostic utilities (edit distance)
//!   ↓
//! base      → Primitives (Position, LineIndex, TextRange, constants)
//! ```
//!
//! ```
//! use tonto::analysis::{AnalysisOptions, analyze};
//!
//! let source = "package Shop\nkind Person\nrole Buyer specializes Person\n";
//! let result = analyze(source, "shop.tonto", &AnalysisOptions::default());
//! assert!(result.errors.is_empty());
//! ```

// ============================================================================
// MODULES (dependency order: base → core → parser → semantic → analysis → project)
// ============================================================================

/// Foundation types: Position, LineIndex, TextRange, constants
pub mod base;

/// Generic utilities: edit distance and "did you mean" matching
pub mod core;

/// Parser: Logos lexer, recursive-descent parser, AST
pub mod parser;

/// Semantic layer: symbol table, checks and pattern detection
pub mod semantic;

/// Whole-file analysis and result aggregation
pub mod analysis;

/// Project management: file and directory loading
pub mod project;

// Re-export commonly needed items
pub use analysis::{AnalysisOptions, AnalysisResult, analyze, analyze_many};
pub use parser::{keywords, parse_source};

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};
