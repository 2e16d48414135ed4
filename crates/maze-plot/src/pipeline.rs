// File: crates/maze-plot/src/pipeline.rs
// Summary: Run-level policies shared by the CLI: comparison preparation and window support.

use anyhow::{bail, Context, Result};
use bench_series::{Comparison, SeriesSet};
use tracing::info;

/// Join the last values of two runs.
///
/// Fails when neither run has any rows, and with `strict` when any label
/// lacks a percentage (missing on one side or undefined delta).
pub fn prepare_comparison(baseline: &SeriesSet, candidate: &SeriesSet, strict: bool) -> Result<Comparison> {
    let cmp = Comparison::join(&baseline.last_values(), &candidate.last_values());
    if cmp.is_empty() {
        bail!("nothing to compare: both runs contain no rows");
    }
    if strict {
        cmp.ensure_complete().context("strict comparison failed")?;
    }
    for entry in cmp.entries() {
        info!(
            label = entry.label.as_str(),
            baseline = ?entry.outcome.baseline(),
            candidate = ?entry.outcome.candidate(),
            "delta {}",
            entry.outcome.annotation()
        );
    }
    Ok(cmp)
}

/// Rejects `--show` when the crate was built without the `window` feature.
pub fn ensure_window_support(show: bool) -> Result<()> {
    if show && !cfg!(feature = "window") {
        bail!("--show needs maze-plot built with `--features window`");
    }
    Ok(())
}

