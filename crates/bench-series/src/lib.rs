// File: crates/bench-series/src/lib.rs
// Summary: Benchmark series library entry point; loading, grouping and comparing maze timing runs.

pub mod error;
pub mod label;
pub mod record;
pub mod aggregate;
pub mod compare;

pub use error::{ClassifyError, DeltaError, IncompleteComparison, LoadError};
pub use label::CanonicalLabel;
pub use record::{load_rows, read_rows, LoadOptions, RawRow};
pub use aggregate::{LastValues, Series, SeriesSet, UnrecognizedPolicy};
pub use compare::{format_percent, percent_difference, Comparison, LabelComparison, Outcome};
