//! Whole-file analysis: lexer, parser, symbol table, checks and pattern
//! detection, folded into one serializable [`AnalysisResult`].
//!
//! ```text
//! source ─→ parse_source ─→ (gate on lex/syntax errors) ─→ SymbolTable
//!                                                            ├─→ checks::check
//!                                                            └─→ detect_all
//! ```
//!
//! Besides the per-pattern buckets, every finding is flattened into two
//! streams: `errors` holds everything of error severity (lexical, syntax,
//! semantic and pattern), `warnings` holds every pattern violation plus the
//! non-error semantic findings. Analysis never fails; a file with problems
//! yields a result describing them.

mod options;
mod result;

pub use options::AnalysisOptions;
pub use result::{
    AnalysisResult, ErrorEntry, ProjectResult, ProjectSummary, Summary, WarningEntry,
};

use rayon::prelude::*;

use crate::base::constants::UNKNOWN_FILENAME;
use crate::parser::{ParsedSource, parse_source_with};
use crate::semantic::diagnostics::codes;
use crate::semantic::patterns::{Pattern, detect_all};
use crate::semantic::symbol_table::{SymbolExport, SymbolTable};
use crate::semantic::{Diagnostic, Severity, checks};

/// Output of the semantic passes over one file
#[derive(Default)]
struct SemanticOutput {
    symbols: SymbolExport,
    diagnostics: Vec<Diagnostic>,
    findings: Vec<Diagnostic>,
    patterns: Vec<Pattern>,
}

fn run_semantic(parsed: &ParsedSource, options: &AnalysisOptions) -> SemanticOutput {
    let table = SymbolTable::from_file(&parsed.file);
    let diagnostics = checks::check(&table);
    let detection = detect_all(&table);
    let findings = detection
        .findings
        .into_iter()
        .filter(|f: &Diagnostic| {
            options.report_single_member_groups || f.code != codes::SINGLE_SPECIALIZATION
        })
        .collect();
    SemanticOutput {
        symbols: table.export(),
        diagnostics,
        findings,
        patterns: detection.patterns,
    }
}

/// Analyze one source text
pub fn analyze(source: &str, filename: &str, options: &AnalysisOptions) -> AnalysisResult {
    let filename = if filename.is_empty() {
        UNKNOWN_FILENAME
    } else {
        filename
    };
    let parsed = parse_source_with(source, filename, options.max_suggestion_distance);

    let mut errors: Vec<ErrorEntry> = parsed.lex_errors.iter().map(ErrorEntry::from).collect();
    errors.extend(parsed.errors.iter().map(ErrorEntry::from));
    let mut warnings = Vec::new();

    let semantic_skipped = options.gate_on_syntax_errors && !parsed.ok();
    let semantic = if semantic_skipped {
        tracing::debug!(
            "[ANALYSIS] {filename}: {} lexical and {} syntax errors, semantic analysis skipped",
            parsed.lex_errors.len(),
            parsed.errors.len()
        );
        SemanticOutput::default()
    } else {
        run_semantic(&parsed, options)
    };

    for diagnostic in semantic.diagnostics.iter().chain(&semantic.findings) {
        if diagnostic.is_error() {
            errors.push(ErrorEntry::from(diagnostic));
        } else {
            warnings.push(WarningEntry::from(diagnostic));
        }
    }

    for pattern in &semantic.patterns {
        for violation in &pattern.violations {
            warnings.push(WarningEntry::from_violation(pattern, violation));
            if violation.severity == Severity::Error {
                errors.push(ErrorEntry::from(&violation.to_diagnostic(pattern.position)));
            }
        }
    }

    let (patterns, incomplete_patterns): (Vec<Pattern>, Vec<Pattern>) =
        semantic.patterns.into_iter().partition(Pattern::is_complete);
    let summary = Summary::new(&patterns, &incomplete_patterns);
    tracing::debug!(
        "[ANALYSIS] {filename}: {} patterns ({} complete), {} errors, {} warnings",
        summary.total_patterns,
        summary.complete_patterns,
        errors.len(),
        warnings.len()
    );

    let ParsedSource {
        tokens,
        lex_errors,
        file,
        errors: syntax_errors,
    } = parsed;

    AnalysisResult {
        filename: filename.into(),
        package: file.package_name().cloned(),
        imports: file.imports.iter().map(|i| i.module.clone()).collect(),
        tokens: if options.include_tokens {
            tokens
        } else {
            Vec::new()
        },
        ast: file,
        symbols: semantic.symbols,
        patterns,
        incomplete_patterns,
        errors,
        warnings,
        lex_errors: lex_errors.iter().map(|e| e.to_diagnostic()).collect(),
        syntax_errors: syntax_errors.iter().map(|e| e.to_diagnostic()).collect(),
        semantic_skipped,
        summary,
    }
}

/// Analyze independent `(filename, source)` pairs in parallel; results keep
/// the input order.
pub fn analyze_many<N, S>(inputs: &[(N, S)], options: &AnalysisOptions) -> ProjectResult
where
    N: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    let files = inputs
        .par_iter()
        .map(|(name, source)| analyze(source.as_ref(), name.as_ref(), options))
        .collect();
    ProjectResult::new(files)
}

#[cfg(test)]
mod tests;
