// File: crates/bench-series/src/error.rs
// Summary: Typed errors for loading, classification and delta computation.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a CSV file into raw rows. Always fatal for the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("'{}' is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("'{}' line {line}: malformed row", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("'{}' line {line}: time must be a non-negative number, got {value}", path.display())]
    InvalidTime { path: PathBuf, line: u64, value: f64 },
}

/// A MazeType string that does not map onto one of the four canonical labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("maze type '{0}' names neither a Debug nor a Release build")]
    UnknownBuild(String),
    #[error("maze type '{0}' names neither HuntKill nor RecursiveMaze")]
    UnknownAlgorithm(String),
    #[error("'{0}' is not a label (expected one of Debug-HuntKill, Debug-RecursiveMaze, Release-HuntKill, Release-RecursiveMaze)")]
    UnknownLabel(String),
}

impl ClassifyError {
    /// The raw text that failed to classify.
    pub fn maze_type(&self) -> &str {
        match self {
            ClassifyError::UnknownBuild(s)
            | ClassifyError::UnknownAlgorithm(s)
            | ClassifyError::UnknownLabel(s) => s,
        }
    }
}

/// Percentage difference that cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DeltaError {
    #[error("baseline is zero, percentage difference to {candidate} is undefined")]
    ZeroBaseline { candidate: f64 },
    #[error("non-finite timing value (baseline {baseline}, candidate {candidate})")]
    NonFinite { baseline: f64, candidate: f64 },
    #[error("percentage difference of {candidate} against baseline {baseline} overflows")]
    Overflow { baseline: f64, candidate: f64 },
}

/// One or more labels had no computable percentage difference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} label(s) could not be compared: {}", .0.len(), .0.join(", "))]
pub struct IncompleteComparison(pub Vec<String>);
