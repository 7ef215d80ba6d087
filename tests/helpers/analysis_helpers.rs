//! Analysis helpers and assertions for integration tests.

use tonto::semantic::{Pattern, PatternKind};
use tonto::{AnalysisOptions, AnalysisResult, analyze};

/// Analyze a source string with default options.
pub fn analyze_default(source: &str) -> AnalysisResult {
    analyze(source, "test.tonto", &AnalysisOptions::default())
}

/// All detected patterns of one kind, complete or not.
pub fn patterns_of(result: &AnalysisResult, kind: PatternKind) -> Vec<&Pattern> {
    result
        .all_patterns()
        .filter(|p| p.pattern_type == kind)
        .collect()
}

/// The single pattern anchored at `anchor`.
pub fn pattern_at<'r>(result: &'r AnalysisResult, kind: PatternKind, anchor: &str) -> &'r Pattern {
    let found: Vec<&Pattern> = patterns_of(result, kind)
        .into_iter()
        .filter(|p| p.anchor_class == anchor)
        .collect();
    assert_eq!(
        found.len(),
        1,
        "expected one {} anchored at '{}', got {}",
        kind.as_str(),
        anchor,
        found.len()
    );
    found[0]
}

/// Assert an analysis produced no error entries.
pub fn assert_no_errors(result: &AnalysisResult) {
    assert!(
        result.errors.is_empty(),
        "Expected no errors, got {} error(s):\n{}",
        result.errors.len(),
        result
            .errors
            .iter()
            .map(|e| format!("  {} {}: {}", e.line.unwrap_or(0), e.code, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
