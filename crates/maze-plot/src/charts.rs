// File: crates/maze-plot/src/charts.rs
// Summary: Builds the maze timing line chart and the two-run comparison bar chart.

use bench_series::{Comparison, SeriesSet};
use chart_core::{Annotation, Axis, Chart, Series, Tick};

pub const LINE_TITLE: &str = "Maze Generation Graph";
pub const LINE_X_LABEL: &str = "Size of Maze (WxH)";
pub const LINE_Y_LABEL: &str = "time_ms";

pub const BAR_TITLE: &str = "Maze Generation Comparison Bar Chart";
pub const BAR_X_LABEL: &str = "Maze Type";
pub const BAR_Y_LABEL: &str = "Time (ms)";

/// Width of each bar in category units; the candidate bar sits one width to the right.
pub const BAR_WIDTH: f64 = 0.35;
pub const BASELINE_NAME: &str = "Original";
pub const CANDIDATE_NAME: &str = "New";

/// Headroom above the tallest line point, in milliseconds.
const LINE_Y_HEADROOM: f64 = 10.0;
/// Horizontal padding as a fraction of the data span.
const X_MARGIN: f64 = 0.05;

/// One marker line per canonical label, x = maze width, y = time.
///
/// All four labels are always present so the legend lists each of them;
/// a label with no rows simply draws nothing. The y axis is `[0, max + 10]`.
pub fn line_chart(set: &SeriesSet) -> Chart {
    let mut chart = Chart::new();
    chart.title = LINE_TITLE.to_string();

    for (label, series) in set.iter() {
        chart.add_series(Series::line(label.as_str(), series.points()).with_markers());
    }

    let (x_min, x_max) = set
        .iter()
        .flat_map(|(_, s)| s.widths().iter().map(|&w| w as f64))
        .fold(None, |acc: Option<(f64, f64)>, w| match acc {
            None => Some((w, w)),
            Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
        })
        .unwrap_or((0.0, 10.0));
    let pad = ((x_max - x_min) * X_MARGIN).max(0.5);
    chart.x_axis = Axis::new(LINE_X_LABEL, x_min - pad, x_max + pad);

    let y_max = set.max_time().unwrap_or(0.0) + LINE_Y_HEADROOM;
    chart.y_axis = Axis::new(LINE_Y_LABEL, 0.0, y_max);
    chart
}

/// Grouped bars of each label's last time: baseline at `i`, candidate at `i + BAR_WIDTH`.
///
/// The baseline bar carries the percentage annotation. Labels compared on
/// one side only still get their single bar, annotated `n/a`.
pub fn comparison_chart(cmp: &Comparison) -> Chart {
    let mut chart = Chart::new();
    chart.title = BAR_TITLE.to_string();

    let mut baseline = Vec::with_capacity(cmp.len());
    let mut candidate = Vec::with_capacity(cmp.len());
    let mut ticks = Vec::with_capacity(cmp.len());
    for (i, entry) in cmp.entries().iter().enumerate() {
        let x = i as f64;
        let base = entry.outcome.baseline();
        if let Some(b) = base {
            baseline.push((x, b));
        }
        if let Some(c) = entry.outcome.candidate() {
            candidate.push((x + BAR_WIDTH, c));
        }
        ticks.push(Tick { value: x + BAR_WIDTH * 0.5, label: entry.label.to_string() });
        chart.annotate(Annotation::new(x, base.unwrap_or(0.0), entry.outcome.annotation()));
    }
    chart.add_series(Series::bar(BASELINE_NAME, baseline, BAR_WIDTH));
    chart.add_series(Series::bar(CANDIDATE_NAME, candidate, BAR_WIDTH));

    let left = -BAR_WIDTH * 0.5;
    let right = cmp.len().saturating_sub(1) as f64 + BAR_WIDTH * 1.5;
    let pad = (right - left) * X_MARGIN;
    chart.x_axis = Axis::new(BAR_X_LABEL, left - pad, right + pad).with_ticks(ticks);

    let top = cmp.max_time().filter(|m| *m > 0.0).unwrap_or(1.0);
    chart.y_axis = Axis::new(BAR_Y_LABEL, 0.0, top * 1.1);
    chart
}
