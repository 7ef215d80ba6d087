//! Name-indexed view over one parsed file
//!
//! The table borrows the AST: classes, gensets, datatypes and enums live in
//! insertion-ordered maps keyed by name, and every relation (internal ones
//! tagged with their owning class) is kept in declaration order. References
//! between declarations stay as names, so cyclic models need no special care.

mod export;
mod symbol;
mod table;

pub use export::{ExportedRelation, SymbolExport};
pub use symbol::{DeclarationKind, Duplicate, RelationSymbol, ResolvedType};
pub use table::SymbolTable;
