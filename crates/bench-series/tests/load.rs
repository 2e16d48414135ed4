// File: crates/bench-series/tests/load.rs
// Purpose: End-to-end load -> aggregate -> compare over CSV files on disk.

use bench_series::{
    load_rows, CanonicalLabel, Comparison, LoadError, LoadOptions, SeriesSet, UnrecognizedPolicy,
};
use std::path::PathBuf;

fn write_csv(name: &str, body: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("bench_series_load");
    std::fs::create_dir_all(&dir).expect("create tmp dir");
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write csv");
    path
}

const BASELINE: &str = "\
MazeType,Time (ms),Width,Height
Debug-RecursiveMazeGen-5,0.5,5,5
Debug-HuntKillMazeGen-5,1.0,5,5
Release-RecursiveMazeGen-5,0.2,5,5
Release-HuntKillMazeGen-5,0.4,5,5
Debug-RecursiveMazeGen-7,0.8,7,7
Debug-HuntKillMazeGen-7,2.0,7,7
Release-RecursiveMazeGen-7,0.25,7,7
Release-HuntKillMazeGen-7,0.5,7,7
";

const CANDIDATE: &str = "\
MazeType,Time (ms),Width,Height
Debug-RecursiveMazeGen-5,0.4,5,5
Debug-HuntKillMazeGen-5,0.5,5,5
Release-RecursiveMazeGen-5,0.2,5,5
Release-HuntKillMazeGen-5,0.3,5,5
Debug-RecursiveMazeGen-7,0.4,7,7
Debug-HuntKillMazeGen-7,1.0,7,7
Release-RecursiveMazeGen-7,0.375,7,7
Release-HuntKillMazeGen-7,0.25,7,7
";

#[test]
fn load_group_and_compare_two_runs() {
    let opts = LoadOptions::default();
    let base_rows = load_rows(write_csv("baseline.csv", BASELINE), &opts).expect("load baseline");
    let cand_rows = load_rows(write_csv("candidate.csv", CANDIDATE), &opts).expect("load candidate");
    assert_eq!(base_rows.len(), 8);

    let base = SeriesSet::from_rows(&base_rows, UnrecognizedPolicy::Error).expect("classify baseline");
    let cand = SeriesSet::from_rows(&cand_rows, UnrecognizedPolicy::Error).expect("classify candidate");
    for (_, series) in base.iter() {
        assert_eq!(series.widths(), &[5, 7]);
    }

    let cmp = Comparison::join(&base.last_values(), &cand.last_values());
    assert_eq!(cmp.len(), 4);
    cmp.ensure_complete().expect("all labels compared");

    let annotations: Vec<String> = cmp.entries().iter().map(|e| e.outcome.annotation()).collect();
    assert_eq!(annotations, vec!["-50%", "-50%", "-50%", "50%"]);
    assert_eq!(cmp.entries()[3].label, CanonicalLabel::ReleaseRecursiveMaze);
}

#[test]
fn missing_file_is_an_open_error_naming_the_path() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("does/not/exist.csv");
    let err = load_rows(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("exist.csv"), "{err}");
}

#[test]
fn header_only_file_yields_empty_series() {
    let path = write_csv("empty.csv", "MazeType,Time (ms),Width,Height\n");
    let rows = load_rows(path, &LoadOptions::default()).expect("load");
    let set = SeriesSet::from_rows(&rows, UnrecognizedPolicy::Error).expect("classify");
    assert_eq!(set.total_rows(), 0);
    assert!(set.iter().all(|(_, s)| s.is_empty()));
}
