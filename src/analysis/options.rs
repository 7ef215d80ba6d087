use crate::parser::DEFAULT_SUGGESTION_DISTANCE;

/// Options controlling a single-file analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Skip semantic analysis when lexical or syntax errors exist
    pub gate_on_syntax_errors: bool,
    /// Maximum edit distance for "did you mean" recommendations
    pub max_suggestion_distance: usize,
    /// Report single-member groups as standalone warnings
    pub report_single_member_groups: bool,
    /// Keep the token stream in the result
    pub include_tokens: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            gate_on_syntax_errors: true,
            max_suggestion_distance: DEFAULT_SUGGESTION_DISTANCE,
            report_single_member_groups: true,
            include_tokens: true,
        }
    }
}

impl AnalysisOptions {
    /// Run semantic analysis even over a partial AST
    pub fn ungated() -> Self {
        Self {
            gate_on_syntax_errors: false,
            ..Self::default()
        }
    }
}
