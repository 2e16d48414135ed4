// File: crates/maze-plot/src/lib.rs
// Summary: Chart builders and output helpers behind the `maze-plot` binary.

pub mod charts;
pub mod output;
pub mod pipeline;
#[cfg(feature = "window")]
pub mod window;

pub use charts::{comparison_chart, line_chart};
pub use output::default_output;
pub use pipeline::{ensure_window_support, prepare_comparison};
