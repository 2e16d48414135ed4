// File: crates/maze-plot/src/output.rs
// Summary: Default PNG destinations derived from the input file name.

use std::path::{Path, PathBuf};

/// Directory used when no `--out` is given.
pub const OUT_DIR: &str = "target/out";

/// `target/out/<input-stem>_<suffix>.png`, or `chart_<suffix>.png` for stem-less inputs.
pub fn default_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let name = if stem.is_empty() {
        format!("chart_{suffix}.png")
    } else {
        format!("{stem}_{suffix}.png")
    };
    Path::new(OUT_DIR).join(name)
}
