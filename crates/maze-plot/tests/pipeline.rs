// File: crates/maze-plot/tests/pipeline.rs
// Purpose: CSV files on disk through aggregation and comparison to rendered PNGs.

use std::path::PathBuf;

use bench_series::{load_rows, Comparison, LoadOptions, SeriesSet, UnrecognizedPolicy};
use chart_core::RenderOptions;
use maze_plot::{comparison_chart, default_output, ensure_window_support, line_chart, prepare_comparison};

const ORIGINAL: &str = "\
MazeType,Time (ms),Width,Height
Debug-HuntKill-5x5,12.0,5,5
Debug-HuntKill-10x10,40.0,10,10
Release-HuntKill-5x5,2.0,5,5
Release-HuntKill-10x10,8.0,10,10
Debug-RecursiveMaze-10x10,30.0,10,10
Release-RecursiveMaze-10x10,0.0,10,10
";

const NEW: &str = "\
MazeType,Time (ms),Width,Height
Debug-HuntKill-10x10,30.0,10,10
Release-HuntKill-10x10,10.0,10,10
Debug-RecursiveMaze-10x10,30.0,10,10
Release-RecursiveMaze-10x10,1.0,10,10
";

fn write(name: &str, body: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("maze_plot_pipeline");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn load(path: &PathBuf) -> SeriesSet {
    let rows = load_rows(path, &LoadOptions::default()).unwrap();
    SeriesSet::from_rows(&rows, UnrecognizedPolicy::Error).unwrap()
}

#[test]
fn line_chart_renders_from_csv() {
    let path = write("original.csv", ORIGINAL);
    let chart = line_chart(&load(&path));
    assert_eq!(chart.series.len(), 4);
    assert_eq!(chart.y_axis.max, 50.0);

    let out = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("maze_plot_pipeline/line.png");
    chart.render_to_png(&RenderOptions::default(), &out).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn comparison_chart_renders_from_two_runs() {
    let original = load(&write("cmp_original.csv", ORIGINAL));
    let new = load(&write("cmp_new.csv", NEW));
    let cmp = Comparison::join(&original.last_values(), &new.last_values());

    let texts: Vec<String> = cmp.entries().iter().map(|e| e.outcome.annotation()).collect();
    assert_eq!(texts, vec!["-25%", "0%", "25%", "undefined"]);
    assert!(cmp.ensure_complete().is_err());

    let chart = comparison_chart(&cmp);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn unrecognized_rows_fail_unless_skipped() {
    let path = write("mixed.csv", "MazeType,Time (ms),Width,Height\nProfile-HuntKill-5x5,1.0,5,5\nDebug-HuntKill-5x5,2.0,5,5\n");
    let rows = load_rows(&path, &LoadOptions::default()).unwrap();
    assert!(SeriesSet::from_rows(&rows, UnrecognizedPolicy::Error).is_err());

    let set = SeriesSet::from_rows(&rows, UnrecognizedPolicy::Skip).unwrap();
    assert_eq!(set.skipped(), 1);
    assert_eq!(set.total_rows(), 1);
}

#[test]
fn default_output_lands_under_target_out() {
    let out = default_output(std::path::Path::new("runs/new.csv"), "compare");
    assert_eq!(out, PathBuf::from("target/out/new_compare.png"));
}

#[test]
fn strict_comparison_rejects_undefined_and_missing_labels() {
    let original = load(&write("strict_original.csv", ORIGINAL));
    let new = load(&write("strict_new.csv", NEW));

    let lenient = prepare_comparison(&original, &new, false).unwrap();
    assert_eq!(lenient.len(), 4);

    let err = prepare_comparison(&original, &new, true).unwrap_err();
    assert!(format!("{err:#}").contains("Release-RecursiveMaze"), "{err:#}");
}

#[test]
fn strict_comparison_passes_when_every_label_has_a_delta() {
    let original = load(&write("complete_original.csv", NEW));
    let new = load(&write("complete_new.csv", NEW));
    let cmp = prepare_comparison(&original, &new, true).unwrap();
    let texts: Vec<String> = cmp.entries().iter().map(|e| e.outcome.annotation()).collect();
    assert_eq!(texts, vec!["0%", "0%", "0%", "0%"]);
}

#[test]
fn comparing_two_empty_runs_is_an_error() {
    let empty = load(&write("empty.csv", "MazeType,Time (ms),Width,Height\n"));
    assert!(prepare_comparison(&empty, &empty, false).is_err());
    assert!(prepare_comparison(&empty, &empty, true).is_err());
}

#[test]
fn show_is_rejected_without_window_support() {
    assert!(ensure_window_support(false).is_ok());
    assert_eq!(ensure_window_support(true).is_ok(), cfg!(feature = "window"));
}
