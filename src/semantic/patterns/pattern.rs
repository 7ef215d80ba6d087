//! Pattern records produced by the detectors.

use serde::Serialize;
use smol_str::SmolStr;

use crate::base::Position;
use crate::parser::keywords::ClassStereotype;
use crate::semantic::diagnostics::{Diagnostic, Severity};

/// The six ontology design patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PatternKind {
    #[serde(rename = "Subkind_Pattern")]
    Subkind,
    #[serde(rename = "Role_Pattern")]
    Role,
    #[serde(rename = "Phase_Pattern")]
    Phase,
    #[serde(rename = "Relator_Pattern")]
    Relator,
    #[serde(rename = "Mode_Pattern")]
    Mode,
    #[serde(rename = "RoleMixin_Pattern")]
    RoleMixin,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        Self::Subkind,
        Self::Role,
        Self::Phase,
        Self::Relator,
        Self::Mode,
        Self::RoleMixin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subkind => "Subkind_Pattern",
            Self::Role => "Role_Pattern",
            Self::Phase => "Phase_Pattern",
            Self::Relator => "Relator_Pattern",
            Self::Mode => "Mode_Pattern",
            Self::RoleMixin => "RoleMixin_Pattern",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternStatus {
    Complete,
    Incomplete,
}

/// A rule broken by a pattern instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Index of the fix for this violation in [`Pattern::suggestions`]
    #[serde(skip)]
    pub suggestion: Option<usize>,
}

impl Violation {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn info(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Info,
            message: message.into(),
            suggestion: None,
        }
    }

    /// The same finding as a positioned diagnostic
    pub fn to_diagnostic(&self, position: Position) -> Diagnostic {
        Diagnostic {
            code: self.code,
            severity: self.severity,
            message: self.message.clone(),
            position: Some(position),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAction {
    InsertCode,
    ModifyCode,
    AddKeyword,
    RemoveKeyword,
}

/// A machine-generated fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub action: SuggestionAction,
    pub message: String,
    pub code_suggestion: String,
}

impl Suggestion {
    pub fn new(
        action: SuggestionAction,
        message: impl Into<String>,
        code_suggestion: impl Into<String>,
    ) -> Self {
        Self {
            action,
            message: message.into(),
            code_suggestion: code_suggestion.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Constraints {
    pub disjoint: bool,
    pub complete: bool,
}

/// Classes taking part in a pattern instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PatternElements {
    /// Subkind, Role and Phase patterns
    Specialization {
        general: SmolStr,
        specifics: Vec<SmolStr>,
        genset: Option<SmolStr>,
    },
    Relator {
        relator: SmolStr,
        mediated: Vec<SmolStr>,
        material_relations: Vec<SmolStr>,
    },
    Mode {
        mode: SmolStr,
        characterizes: Vec<SmolStr>,
        depends_on: Vec<SmolStr>,
    },
    RoleMixin {
        role_mixin: SmolStr,
        specifics: Vec<SmolStr>,
        genset: Option<SmolStr>,
    },
}

/// One detected pattern instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub pattern_type: PatternKind,
    pub status: PatternStatus,
    pub anchor_class: SmolStr,
    pub anchor_stereotype: ClassStereotype,
    /// Position of the anchor class
    pub position: Position,
    pub elements: PatternElements,
    pub constraints: Constraints,
    pub violations: Vec<Violation>,
    pub suggestions: Vec<Suggestion>,
}

impl Pattern {
    pub fn is_complete(&self) -> bool {
        self.status == PatternStatus::Complete
    }

    pub fn has_violation(&self, code: &str) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    pub fn suggestion_for(&self, violation: &Violation) -> Option<&Suggestion> {
        violation.suggestion.and_then(|i| self.suggestions.get(i))
    }
}

/// Accumulates violations and suggestions, then settles the status
pub struct PatternBuilder {
    kind: PatternKind,
    anchor_class: SmolStr,
    anchor_stereotype: ClassStereotype,
    position: Position,
    constraints: Constraints,
    violations: Vec<Violation>,
    suggestions: Vec<Suggestion>,
}

impl PatternBuilder {
    pub fn new(
        kind: PatternKind,
        anchor_class: &SmolStr,
        anchor_stereotype: ClassStereotype,
        position: Position,
    ) -> Self {
        Self {
            kind,
            anchor_class: anchor_class.clone(),
            anchor_stereotype,
            position,
            constraints: Constraints::default(),
            violations: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn constraints(&mut self, constraints: Constraints) -> &mut Self {
        self.constraints = constraints;
        self
    }

    pub fn violation(&mut self, violation: Violation) -> &mut Self {
        self.violations.push(violation);
        self
    }

    /// Add a fix; it belongs to the last violation if that has none yet
    pub fn suggestion(&mut self, suggestion: Suggestion) -> &mut Self {
        if let Some(last) = self.violations.last_mut().filter(|v| v.suggestion.is_none()) {
            last.suggestion = Some(self.suggestions.len());
        }
        self.suggestions.push(suggestion);
        self
    }

    /// Incomplete iff any violation is a warning or an error
    pub fn build(self, elements: PatternElements) -> Pattern {
        let blocked = self
            .violations
            .iter()
            .any(|v| v.severity.blocks_completeness());
        Pattern {
            pattern_type: self.kind,
            status: if blocked {
                PatternStatus::Incomplete
            } else {
                PatternStatus::Complete
            },
            anchor_class: self.anchor_class,
            anchor_stereotype: self.anchor_stereotype,
            position: self.position,
            elements,
            constraints: self.constraints,
            violations: self.violations,
            suggestions: self.suggestions,
        }
    }
}
