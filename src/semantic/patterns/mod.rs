//! Pattern detection over a [`SymbolTable`].
//!
//! Six detectors each look for one ontology design pattern:
//!
//! ```text
//! Subkind   kind/subkind partitioned by subkinds      (specialization.rs driver)
//! Role      roles of a common type                    (specialization.rs driver)
//! Phase     phases partitioning a common type         (specialization.rs driver)
//! Relator   relator and its mediations
//! Mode      mode with characterization and dependence
//! RoleMixin roleMixin specialized by roles
//! ```
//!
//! A detector returns the pattern instances it found plus standalone
//! findings that belong to no pattern (single-member groups). Detectors are
//! stateless and run in the fixed order of [`DETECTORS`].

pub mod genset;
mod mode;
mod pattern;
mod phase;
mod relator;
mod role;
mod rolemixin;
mod specialization;
mod subkind;

#[cfg(test)]
mod tests;

pub use mode::ModeDetector;
pub use pattern::{
    Constraints, Pattern, PatternBuilder, PatternElements, PatternKind, PatternStatus, Suggestion,
    SuggestionAction, Violation,
};
pub use phase::PhaseDetector;
pub use relator::RelatorDetector;
pub use role::RoleDetector;
pub use rolemixin::RoleMixinDetector;
pub use subkind::SubkindDetector;

use crate::semantic::diagnostics::Diagnostic;
use crate::semantic::symbol_table::SymbolTable;

/// Output of one or more detectors
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub patterns: Vec<Pattern>,
    /// Findings outside any pattern
    pub findings: Vec<Diagnostic>,
}

impl Detection {
    pub fn extend(&mut self, other: Detection) {
        self.patterns.extend(other.patterns);
        self.findings.extend(other.findings);
    }
}

pub trait PatternDetector: Sync {
    fn kind(&self) -> PatternKind;
    fn detect(&self, table: &SymbolTable<'_>) -> Detection;
}

/// All detectors, in reporting order
pub static DETECTORS: [&dyn PatternDetector; 6] = [
    &SubkindDetector,
    &RoleDetector,
    &PhaseDetector,
    &RelatorDetector,
    &ModeDetector,
    &RoleMixinDetector,
];

/// Run every detector over `table`
pub fn detect_all(table: &SymbolTable<'_>) -> Detection {
    let mut detection = Detection::default();
    for detector in DETECTORS {
        let found = detector.detect(table);
        tracing::debug!(
            "[PATTERNS] {}: {} patterns, {} findings",
            detector.kind(),
            found.patterns.len(),
            found.findings.len()
        );
        detection.extend(found);
    }
    detection
}
