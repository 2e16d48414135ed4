// File: crates/bench-series/src/aggregate.rs
// Summary: Groups raw rows into per-label (width, time) series and extracts last values.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::ClassifyError;
use crate::label::CanonicalLabel;
use crate::record::RawRow;

/// Ordered (width, time) samples for one label.
/// Contract: `widths.len() == times.len()`, in row-encounter order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    widths: Vec<u32>,
    times: Vec<f64>,
}

impl Series {
    fn push(&mut self, width: u32, time_ms: f64) {
        self.widths.push(width);
        self.times.push(time_ms);
    }

    pub fn widths(&self) -> &[u32] { &self.widths }
    pub fn times(&self) -> &[f64] { &self.times }
    pub fn len(&self) -> usize { self.times.len() }
    pub fn is_empty(&self) -> bool { self.times.is_empty() }

    /// Samples as chart coordinates (x = width, y = time).
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.widths.iter().zip(&self.times).map(|(&w, &t)| (w as f64, t)).collect()
    }

    /// Time of the final sample, if any.
    pub fn last_time(&self) -> Option<f64> { self.times.last().copied() }

    pub fn max_time(&self) -> Option<f64> {
        self.times.iter().copied().reduce(f64::max)
    }
}

/// What to do with a row whose MazeType matches no canonical label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnrecognizedPolicy {
    /// Abort the whole aggregation with the classification error.
    #[default]
    Error,
    /// Drop the row, log it, and count it in [`SeriesSet::skipped`].
    Skip,
}

/// All four label series for one dataset. Every label is present, possibly empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    series: [Series; 4],
    skipped: usize,
}

impl SeriesSet {
    /// Single pass over `rows`, appending each row to its label's series.
    pub fn from_rows<'a, I>(rows: I, policy: UnrecognizedPolicy) -> Result<Self, ClassifyError>
    where
        I: IntoIterator<Item = &'a RawRow>,
    {
        let mut set = SeriesSet::default();
        for row in rows {
            match CanonicalLabel::classify(&row.maze_type) {
                Ok(label) => set.series[label.index()].push(row.width, row.time_ms),
                Err(err) => match policy {
                    UnrecognizedPolicy::Error => return Err(err),
                    UnrecognizedPolicy::Skip => {
                        warn!(maze_type = err.maze_type(), "skipping unrecognized row: {err}");
                        set.skipped += 1;
                    }
                },
            }
        }
        Ok(set)
    }

    pub fn get(&self, label: CanonicalLabel) -> &Series {
        &self.series[label.index()]
    }

    /// Labels in declared order with their series.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalLabel, &Series)> + '_ {
        CanonicalLabel::ALL.into_iter().map(move |l| (l, self.get(l)))
    }

    /// Rows dropped under [`UnrecognizedPolicy::Skip`].
    pub fn skipped(&self) -> usize { self.skipped }

    /// Rows that landed in some series.
    pub fn total_rows(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    pub fn max_time(&self) -> Option<f64> {
        self.series.iter().filter_map(Series::max_time).reduce(f64::max)
    }

    /// Final time of each non-empty series.
    pub fn last_values(&self) -> LastValues {
        self.iter().filter_map(|(l, s)| s.last_time().map(|t| (l, t))).collect()
    }
}

/// Label -> last recorded time. Labels with no rows are absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LastValues(BTreeMap<CanonicalLabel, f64>);

impl LastValues {
    pub fn get(&self, label: CanonicalLabel) -> Option<f64> {
        self.0.get(&label).copied()
    }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalLabel, f64)> + '_ {
        self.0.iter().map(|(l, t)| (*l, *t))
    }
}

impl FromIterator<(CanonicalLabel, f64)> for LastValues {
    fn from_iter<T: IntoIterator<Item = (CanonicalLabel, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
