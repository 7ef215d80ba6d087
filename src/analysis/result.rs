use indexmap::IndexMap;
use serde::Serialize;
use smol_str::SmolStr;

use crate::parser::ast::File;
use crate::parser::errors::SourceDiagnostic;
use crate::parser::{LexError, SyntaxError, Token};
use crate::semantic::patterns::{Pattern, PatternKind, Suggestion, Violation};
use crate::semantic::{Diagnostic, Severity, SymbolExport};

/// One entry of the flat error stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub code: SmolStr,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl From<&LexError> for ErrorEntry {
    fn from(error: &LexError) -> Self {
        Self {
            code: error.code.as_str().into(),
            severity: Severity::Error,
            message: error.message.clone(),
            line: Some(error.line),
            column: Some(error.column),
        }
    }
}

impl From<&SyntaxError> for ErrorEntry {
    fn from(error: &SyntaxError) -> Self {
        Self {
            code: error.code.as_str().into(),
            severity: Severity::Error,
            message: error.message.clone(),
            line: Some(error.line),
            column: Some(error.column),
        }
    }
}

impl From<&Diagnostic> for ErrorEntry {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: diagnostic.code.into(),
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            line: diagnostic.position.map(|p| p.line),
            column: diagnostic.position.map(|p| p.column),
        }
    }
}

/// One entry of the flat warning stream; pattern violations carry their
/// pattern and anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningEntry {
    pub code: SmolStr,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<PatternKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_class: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl WarningEntry {
    pub fn from_violation(pattern: &Pattern, violation: &Violation) -> Self {
        Self {
            code: violation.code.into(),
            severity: violation.severity,
            message: violation.message.clone(),
            pattern_type: Some(pattern.pattern_type),
            anchor_class: Some(pattern.anchor_class.clone()),
            suggestion: pattern.suggestion_for(violation).cloned(),
        }
    }
}

impl From<&Diagnostic> for WarningEntry {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: diagnostic.code.into(),
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            pattern_type: None,
            anchor_class: None,
            suggestion: None,
        }
    }
}

/// Pattern totals; `pattern_counts` always lists all six kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_patterns: usize,
    pub complete_patterns: usize,
    pub incomplete_patterns: usize,
    pub pattern_counts: IndexMap<&'static str, usize>,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_patterns: 0,
            complete_patterns: 0,
            incomplete_patterns: 0,
            pattern_counts: PatternKind::ALL.iter().map(|k| (k.as_str(), 0)).collect(),
        }
    }
}

impl Summary {
    pub fn new(complete: &[Pattern], incomplete: &[Pattern]) -> Self {
        let mut summary = Self::default();
        for pattern in complete.iter().chain(incomplete) {
            *summary
                .pattern_counts
                .entry(pattern.pattern_type.as_str())
                .or_default() += 1;
        }
        summary.complete_patterns = complete.len();
        summary.incomplete_patterns = incomplete.len();
        summary.total_patterns = complete.len() + incomplete.len();
        summary
    }

    /// Add another summary's counts to this one
    pub fn merge(&mut self, other: &Summary) {
        self.total_patterns += other.total_patterns;
        self.complete_patterns += other.complete_patterns;
        self.incomplete_patterns += other.incomplete_patterns;
        for (kind, count) in &other.pattern_counts {
            *self.pattern_counts.entry(*kind).or_default() += count;
        }
    }
}

/// Everything known about one analyzed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub filename: SmolStr,
    pub package: Option<SmolStr>,
    pub imports: Vec<SmolStr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
    pub ast: File,
    pub symbols: SymbolExport,
    /// Complete patterns only
    pub patterns: Vec<Pattern>,
    pub incomplete_patterns: Vec<Pattern>,
    pub errors: Vec<ErrorEntry>,
    pub warnings: Vec<WarningEntry>,
    pub lex_errors: Vec<SourceDiagnostic>,
    pub syntax_errors: Vec<SourceDiagnostic>,
    /// Semantic analysis did not run because of lexical or syntax errors
    pub semantic_skipped: bool,
    pub summary: Summary,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Complete and incomplete patterns, complete first
    pub fn all_patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().chain(&self.incomplete_patterns)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-file results of a directory analysis, in path order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResult {
    /// Cross-file ontology; files are not linked to each other yet
    pub ontology: Option<SymbolExport>,
    pub files: Vec<AnalysisResult>,
    pub summary: ProjectSummary,
}

impl ProjectResult {
    pub fn new(files: Vec<AnalysisResult>) -> Self {
        let mut summary = ProjectSummary {
            files: files.len(),
            ..ProjectSummary::default()
        };
        for file in &files {
            if file.has_errors() {
                summary.files_with_errors += 1;
            }
            summary.patterns.merge(&file.summary);
        }
        Self {
            ontology: None,
            files,
            summary,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub files: usize,
    pub files_with_errors: usize,
    #[serde(flatten)]
    pub patterns: Summary,
}
