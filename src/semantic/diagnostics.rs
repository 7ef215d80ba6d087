//! Semantic diagnostics and their stable codes.
//!
//! Produced by the cross-cutting checks and the pattern detectors. Every
//! finding carries one of the [`codes`].

use serde::Serialize;

use crate::base::Position;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Warnings and errors keep a pattern from being complete.
    pub fn blocks_completeness(&self) -> bool {
        *self >= Severity::Warning
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A semantic diagnostic with an optional source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable code from [`codes`].
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Declaration the diagnostic points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Diagnostic {
    fn new(code: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            position: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Warning, message)
    }

    /// Create a new informational diagnostic.
    pub fn info(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(code, Severity::Info, message)
    }

    /// Attach the declaration position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes for semantic findings.
///
/// Codes are self-describing names; they appear verbatim in analysis output.
pub mod codes {
    // ========================================================================
    // CROSS-CUTTING CHECKS
    // ========================================================================

    /// Attribute type is not a primitive, class, datatype or enum.
    pub const UNRESOLVED_TYPE: &str = "UNRESOLVED_TYPE";
    /// Specialization parent is not declared.
    pub const UNDEFINED_PARENT: &str = "UNDEFINED_PARENT";
    /// Relation end is not a declared class.
    pub const RELATION_TARGET_NOT_FOUND: &str = "RELATION_TARGET_NOT_FOUND";
    /// Genset general or specific is not declared.
    pub const UNDEFINED_GENSET_MEMBER: &str = "UNDEFINED_GENSET_MEMBER";
    /// Genset lists a single specific.
    pub const GENSET_SINGLE_SPECIFIC: &str = "GENSET_SINGLE_SPECIFIC";
    /// Genset specific does not specialize the general.
    pub const GENSET_SPECIFIC_NOT_CHILD: &str = "GENSET_SPECIFIC_NOT_CHILD";
    /// Cardinality lower bound exceeds its upper bound.
    pub const INVALID_CARDINALITY: &str = "INVALID_CARDINALITY";
    /// A name is declared more than once; the last declaration wins.
    pub const DUPLICATE_DECLARATION: &str = "DUPLICATE_DECLARATION";

    // ========================================================================
    // GENERALIZATION PATTERNS (Subkind, Role, Phase)
    // ========================================================================

    /// No genset formalizes the grouping.
    pub const MISSING_GENSET: &str = "MISSING_GENSET";
    /// The matching genset omits some of the detected specifics.
    pub const INCOMPLETE_GENSET_SPECIFICS: &str = "INCOMPLETE_GENSET_SPECIFICS";
    /// Genset should be `disjoint`.
    pub const MISSING_DISJOINT: &str = "MISSING_DISJOINT";
    /// Genset could be `complete`.
    pub const MISSING_COMPLETE: &str = "MISSING_COMPLETE";
    /// More than one genset shares the general.
    pub const MULTIPLE_GENSETS: &str = "MULTIPLE_GENSETS";
    /// Roles overlap, so a role genset must not be `disjoint`.
    pub const DISJOINT_ROLE_GENSET: &str = "DISJOINT_ROLE_GENSET";
    /// A role is a specific of several gensets.
    pub const ROLE_IN_MULTIPLE_GENSETS: &str = "ROLE_IN_MULTIPLE_GENSETS";
    /// A role takes part in no relation.
    pub const ROLE_WITHOUT_RELATION: &str = "ROLE_WITHOUT_RELATION";
    /// A phase is a specific of several gensets.
    pub const PHASE_IN_MULTIPLE_GENSETS: &str = "PHASE_IN_MULTIPLE_GENSETS";

    // ========================================================================
    // RELATOR PATTERN
    // ========================================================================

    /// Fewer than two distinct, existing mediated classes.
    pub const INSUFFICIENT_MEDIATIONS: &str = "INSUFFICIENT_MEDIATIONS";
    /// Mediation target is not a declared class.
    pub const MEDIATION_TARGET_NOT_FOUND: &str = "MEDIATION_TARGET_NOT_FOUND";
    /// Two mediated classes lack a `@material` relation between them.
    pub const MISSING_MATERIAL_RELATION: &str = "MISSING_MATERIAL_RELATION";

    // ========================================================================
    // MODE PATTERN
    // ========================================================================

    /// Mode has no `@characterization` relation.
    pub const MODE_WITHOUT_CHARACTERIZATION: &str = "MODE_WITHOUT_CHARACTERIZATION";
    /// Mode has no `@externalDependence` relation.
    pub const MODE_WITHOUT_EXTERNAL_DEPENDENCE: &str = "MODE_WITHOUT_EXTERNAL_DEPENDENCE";
    /// Mode is a general or specific of a genset.
    pub const MODE_IN_GENSET: &str = "MODE_IN_GENSET";

    // ========================================================================
    // ROLEMIXIN PATTERN
    // ========================================================================

    /// RoleMixin is specialized by nothing.
    pub const ROLEMIXIN_WITHOUT_SPECIFICS: &str = "ROLEMIXIN_WITHOUT_SPECIFICS";
    /// A roleMixin specific is neither a role nor a roleMixin.
    pub const INVALID_ROLEMIXIN_SPECIFIC: &str = "INVALID_ROLEMIXIN_SPECIFIC";
    /// RoleMixin genset should not be `disjoint`.
    pub const DISJOINT_ROLEMIXIN_GENSET: &str = "DISJOINT_ROLEMIXIN_GENSET";

    // ========================================================================
    // SHARED
    // ========================================================================

    /// Stereotype combination not allowed between parent and child.
    pub const INVALID_SPECIALIZATION: &str = "INVALID_SPECIALIZATION";
    /// A grouping has a single member, so no pattern is formed.
    pub const SINGLE_SPECIALIZATION: &str = "SINGLE_SPECIALIZATION";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during semantic analysis.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, code: &'static str, message: impl Into<String>, position: Position) {
        self.add(Diagnostic::error(code, message).with_position(position));
    }

    pub fn warning(&mut self, code: &'static str, message: impl Into<String>, position: Position) {
        self.add(Diagnostic::warning(code, message).with_position(position));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all collected diagnostics.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
