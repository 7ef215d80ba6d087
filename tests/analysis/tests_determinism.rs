#![allow(clippy::unwrap_used)]

use tonto::{AnalysisOptions, analyze, analyze_many};

use crate::helpers::source_fixtures::*;

#[test]
fn test_repeated_analysis_is_identical() {
    let options = AnalysisOptions::default();
    let first = analyze(CAR_RENTAL, "car_rental.tonto", &options);
    let second = analyze(CAR_RENTAL, "car_rental.tonto", &options);

    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.ast, second.ast);
    assert_eq!(first.patterns, second.patterns);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_parallel_analysis_matches_sequential() {
    let inputs = vec![
        ("car_rental.tonto", CAR_RENTAL),
        ("people.tonto", PERSON_SUBKINDS),
        ("health.tonto", HEADACHE_WITHOUT_DEPENDENCE),
        ("life.tonto", PHASES_IN_TWO_GENSETS),
    ];
    let options = AnalysisOptions::default();
    let project = analyze_many(&inputs, &options);

    for ((name, source), file) in inputs.iter().zip(&project.files) {
        let alone = analyze(source, name, &options);
        assert_eq!(file.filename, *name);
        assert_eq!(file.to_json().unwrap(), alone.to_json().unwrap());
    }
}
