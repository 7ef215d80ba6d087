#![allow(clippy::unwrap_used)]

use std::fs;

use tonto::project::{LoadError, ProjectOptions, WorkspaceLoader};
use tonto::AnalysisOptions;

use crate::helpers::source_fixtures::*;

fn write_models(dir: &std::path::Path) {
    fs::create_dir(dir.join("health")).unwrap();
    fs::write(dir.join("rental.tonto"), CAR_RENTAL).unwrap();
    fs::write(dir.join("people.tonto"), PERSON_SUBKINDS_WITH_GENSET).unwrap();
    fs::write(dir.join("health/headache.tonto"), HEADACHE_WITHOUT_DEPENDENCE).unwrap();
    fs::write(dir.join("README.md"), "# models").unwrap();
}

#[test]
fn test_directory_results_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write_models(dir.path());

    let project = WorkspaceLoader::new().analyze_directory(dir.path()).unwrap();
    let names: Vec<String> = project
        .files
        .iter()
        .map(|f| {
            std::path::Path::new(f.filename.as_str())
                .strip_prefix(dir.path())
                .unwrap()
                .display()
                .to_string()
        })
        .collect();
    assert_eq!(
        names,
        ["health/headache.tonto", "people.tonto", "rental.tonto"]
    );
}

#[test]
fn test_project_summary_adds_up_files() {
    let dir = tempfile::tempdir().unwrap();
    write_models(dir.path());

    let project = WorkspaceLoader::new().analyze_directory(dir.path()).unwrap();
    let summary = &project.summary;
    assert_eq!(summary.files, 3);
    // Only the headache mode is missing a relation
    assert_eq!(summary.files_with_errors, 1);
    assert_eq!(summary.patterns.total_patterns, 9);
    assert_eq!(summary.patterns.incomplete_patterns, 1);
    assert_eq!(summary.patterns.pattern_counts["Subkind_Pattern"], 2);
    assert_eq!(summary.patterns.pattern_counts["Mode_Pattern"], 2);
    assert!(project.ontology.is_none());

    let value: serde_json::Value = serde_json::from_str(&project.to_json().unwrap()).unwrap();
    assert_eq!(value["summary"]["files"], 3);
    assert_eq!(value["summary"]["total_patterns"], 9);
}

#[test]
fn test_loader_options_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("model.onto"), PERSON_SUBKINDS).unwrap();
    fs::write(dir.path().join("model.tonto"), CAR_RENTAL).unwrap();

    let loader = WorkspaceLoader::new()
        .with_options(ProjectOptions {
            extension: "onto".to_string(),
            parallel: false,
        })
        .with_analysis_options(AnalysisOptions {
            include_tokens: false,
            ..AnalysisOptions::default()
        });
    let project = loader.analyze_directory(dir.path()).unwrap();

    assert_eq!(project.files.len(), 1);
    assert!(project.files[0].filename.ends_with("model.onto"));
    assert!(project.files[0].tokens.is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorkspaceLoader::new()
        .analyze_directory(&dir.path().join("absent"))
        .unwrap_err();
    assert!(matches!(err, LoadError::NotADirectory(_)));
    assert!(err.to_string().contains("absent"));
}
