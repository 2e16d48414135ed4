// File: crates/bench-series/src/record.rs
// Summary: Raw benchmark rows and CSV loading with column and value checks.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::LoadError;

/// Column names every headed input must carry, in harness output order.
pub const COLUMNS: [&str; 4] = ["MazeType", "Time (ms)", "Width", "Height"];

/// One benchmark measurement as written by the maze harness.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "MazeType")]
    pub maze_type: String,
    #[serde(rename = "Time (ms)")]
    pub time_ms: f64,
    #[serde(rename = "Width")]
    pub width: u32,
    #[serde(rename = "Height")]
    pub height: u32,
}

impl RawRow {
    pub fn new(maze_type: impl Into<String>, time_ms: f64, width: u32, height: u32) -> Self {
        Self { maze_type: maze_type.into(), time_ms, width, height }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LoadOptions {
    /// When false, columns are read by position in [`COLUMNS`] order.
    /// The harness appends rows without ever writing a header line.
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { has_headers: true }
    }
}

/// Load every row of the CSV at `path`.
pub fn load_rows(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Vec<RawRow>, LoadError> {
    let path = path.as_ref();
    let rdr = builder(opts)
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let rows = collect_rows(rdr, path)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded benchmark rows");
    Ok(rows)
}

/// Read rows from any reader; `name` is only used in error messages.
pub fn read_rows<R: io::Read>(reader: R, name: impl AsRef<Path>, opts: &LoadOptions) -> Result<Vec<RawRow>, LoadError> {
    collect_rows(builder(opts).from_reader(reader), name.as_ref())
}

fn builder(opts: &LoadOptions) -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(opts.has_headers).trim(csv::Trim::All);
    b
}

fn collect_rows<R: io::Read>(mut rdr: csv::Reader<R>, path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let parse_err = |source: csv::Error| {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        LoadError::Parse { path: path.to_path_buf(), line, source }
    };

    let headers = if rdr.has_headers() {
        let headers = rdr.headers().map_err(parse_err)?.clone();
        if let Some(column) = COLUMNS.iter().copied().find(|c| !headers.iter().any(|h| h == *c)) {
            return Err(LoadError::MissingColumn { path: path.to_path_buf(), column });
        }
        Some(headers)
    } else {
        None
    };

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(parse_err)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: RawRow = record
            .deserialize(headers.as_ref())
            .map_err(|source| LoadError::Parse { path: path.to_path_buf(), line, source })?;
        if !row.time_ms.is_finite() || row.time_ms < 0.0 {
            return Err(LoadError::InvalidTime { path: PathBuf::from(path), line, value: row.time_ms });
        }
        rows.push(row);
    }
    Ok(rows)
}
