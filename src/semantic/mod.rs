//! Semantic analysis over a parsed file.
//!
//! ```text
//! ast::File
//!     ↓
//! SymbolTable      → name-indexed classes, gensets, datatypes, enums, relations
//!     ↓
//! checks::check    → resolution, genset shape, cardinality, duplicates
//! patterns         → six design-pattern detectors
//! ```
//!
//! Both passes only read the table. Findings use the stable codes in
//! [`diagnostics::codes`].

pub mod checks;
pub mod diagnostics;
pub mod patterns;
pub mod symbol_table;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity};
pub use patterns::{Detection, Pattern, PatternDetector, PatternKind, detect_all};
pub use symbol_table::{SymbolExport, SymbolTable};
