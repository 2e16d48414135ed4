// File: crates/bench-series/src/compare.rs
// Summary: Structural join of two runs' last values and percentage-difference computation.
// Notes:
// - Sign convention: the candidate is measured against the baseline, so a
//   positive percentage means the candidate run took longer.

use tracing::warn;

use crate::aggregate::LastValues;
use crate::error::{DeltaError, IncompleteComparison};
use crate::label::CanonicalLabel;

/// `(candidate - baseline) / baseline * 100`.
pub fn percent_difference(baseline: f64, candidate: f64) -> Result<f64, DeltaError> {
    if !baseline.is_finite() || !candidate.is_finite() {
        return Err(DeltaError::NonFinite { baseline, candidate });
    }
    if baseline == 0.0 {
        return Err(DeltaError::ZeroBaseline { candidate });
    }
    let percent = (candidate - baseline) / baseline * 100.0;
    if !percent.is_finite() {
        return Err(DeltaError::Overflow { baseline, candidate });
    }
    Ok(percent)
}

/// Whole percent, truncated toward zero: `10.9 -> "10%"`, `-3.7 -> "-3%"`.
pub fn format_percent(percent: f64) -> String {
    format!("{}%", percent.trunc() as i64)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Compared { baseline: f64, candidate: f64, percent: f64 },
    /// Both sides present but the delta is not computable.
    Undefined { baseline: f64, candidate: f64, reason: DeltaError },
    MissingBaseline { candidate: f64 },
    MissingCandidate { baseline: f64 },
}

impl Outcome {
    pub fn baseline(&self) -> Option<f64> {
        match *self {
            Outcome::Compared { baseline, .. }
            | Outcome::Undefined { baseline, .. }
            | Outcome::MissingCandidate { baseline } => Some(baseline),
            Outcome::MissingBaseline { .. } => None,
        }
    }

    pub fn candidate(&self) -> Option<f64> {
        match *self {
            Outcome::Compared { candidate, .. }
            | Outcome::Undefined { candidate, .. }
            | Outcome::MissingBaseline { candidate } => Some(candidate),
            Outcome::MissingCandidate { .. } => None,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match *self {
            Outcome::Compared { percent, .. } => Some(percent),
            _ => None,
        }
    }

    /// Text drawn above the baseline bar.
    pub fn annotation(&self) -> String {
        match self {
            Outcome::Compared { percent, .. } => format_percent(*percent),
            Outcome::Undefined { .. } => "undefined".to_string(),
            Outcome::MissingBaseline { .. } | Outcome::MissingCandidate { .. } => "n/a".to_string(),
        }
    }

    fn describe(&self) -> Option<String> {
        match self {
            Outcome::Compared { .. } => None,
            Outcome::Undefined { reason, .. } => Some(reason.to_string()),
            Outcome::MissingBaseline { .. } => Some("missing from baseline".to_string()),
            Outcome::MissingCandidate { .. } => Some("missing from candidate".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelComparison {
    pub label: CanonicalLabel,
    pub outcome: Outcome,
}

/// Per-label comparison of two runs, in declared label order.
/// Labels absent from both runs are omitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    entries: Vec<LabelComparison>,
}

impl Comparison {
    pub fn join(baseline: &LastValues, candidate: &LastValues) -> Self {
        let mut entries = Vec::with_capacity(CanonicalLabel::ALL.len());
        for label in CanonicalLabel::ALL {
            let outcome = match (baseline.get(label), candidate.get(label)) {
                (Some(b), Some(c)) => match percent_difference(b, c) {
                    Ok(percent) => Outcome::Compared { baseline: b, candidate: c, percent },
                    Err(reason) => Outcome::Undefined { baseline: b, candidate: c, reason },
                },
                (None, Some(c)) => Outcome::MissingBaseline { candidate: c },
                (Some(b), None) => Outcome::MissingCandidate { baseline: b },
                (None, None) => continue,
            };
            if let Some(detail) = outcome.describe() {
                warn!(label = label.as_str(), "not compared: {detail}");
            }
            entries.push(LabelComparison { label, outcome });
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[LabelComparison] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, label: CanonicalLabel) -> Option<&LabelComparison> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Tallest bar on either side.
    pub fn max_time(&self) -> Option<f64> {
        self.entries
            .iter()
            .flat_map(|e| [e.outcome.baseline(), e.outcome.candidate()])
            .flatten()
            .reduce(f64::max)
    }

    /// Error listing every label without a computed percentage.
    pub fn ensure_complete(&self) -> Result<(), IncompleteComparison> {
        let missing: Vec<String> = self
            .entries
            .iter()
            .filter_map(|e| e.outcome.describe().map(|d| format!("{} ({d})", e.label)))
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(IncompleteComparison(missing)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lv(pairs: &[(CanonicalLabel, f64)]) -> LastValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn ten_percent_slower() {
        let p = percent_difference(100.0, 110.0).unwrap();
        assert!((p - 10.0).abs() < 1e-9);
        assert_eq!(format_percent(p), "10%");
    }

    #[test]
    fn percent_is_truncated_not_rounded() {
        let p = percent_difference(3.0, 2.0).unwrap();
        assert!((p + 33.333).abs() < 1e-2);
        assert_eq!(format_percent(p), "-33%");
        assert_eq!(format_percent(99.99), "99%");
        assert_eq!(format_percent(-0.4), "0%");
    }

    #[test]
    fn zero_baseline_is_explicit() {
        assert_eq!(percent_difference(0.0, 5.0), Err(DeltaError::ZeroBaseline { candidate: 5.0 }));
        assert!(matches!(percent_difference(f64::NAN, 1.0), Err(DeltaError::NonFinite { .. })));
    }

    #[test]
    fn subnormal_baseline_overflows_instead_of_saturating() {
        assert_eq!(
            percent_difference(1e-320, 1.0),
            Err(DeltaError::Overflow { baseline: 1e-320, candidate: 1.0 })
        );

        let cmp = Comparison::join(
            &lv(&[(CanonicalLabel::DebugHuntKill, 1e-320)]),
            &lv(&[(CanonicalLabel::DebugHuntKill, 1.0)]),
        );
        let outcome = cmp.get(CanonicalLabel::DebugHuntKill).unwrap().outcome;
        assert_eq!(outcome.annotation(), "undefined");
        assert_eq!(outcome.percent(), None);
        assert!(cmp.ensure_complete().is_err());
    }

    #[test]
    fn join_uses_declared_order_and_marks_gaps() {
        use CanonicalLabel::*;
        let base = lv(&[(ReleaseRecursiveMaze, 50.0), (DebugHuntKill, 100.0), (ReleaseHuntKill, 0.0)]);
        let cand = lv(&[(DebugHuntKill, 110.0), (DebugRecursiveMaze, 7.0), (ReleaseHuntKill, 5.0)]);
        let cmp = Comparison::join(&base, &cand);

        let labels: Vec<_> = cmp.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![DebugHuntKill, DebugRecursiveMaze, ReleaseHuntKill, ReleaseRecursiveMaze]);

        let p = cmp.get(DebugHuntKill).unwrap().outcome.percent().unwrap();
        assert!((p - 10.0).abs() < 1e-9);
        assert_eq!(cmp.get(DebugRecursiveMaze).unwrap().outcome, Outcome::MissingBaseline { candidate: 7.0 });
        assert_eq!(cmp.get(ReleaseRecursiveMaze).unwrap().outcome, Outcome::MissingCandidate { baseline: 50.0 });
        let undefined = cmp.get(ReleaseHuntKill).unwrap().outcome;
        assert_eq!(undefined.annotation(), "undefined");
        assert!(matches!(undefined, Outcome::Undefined { reason: DeltaError::ZeroBaseline { .. }, .. }));

        assert_eq!(cmp.max_time(), Some(110.0));
        let err = cmp.ensure_complete().unwrap_err();
        assert_eq!(err.0.len(), 3);
        assert!(err.0[0].starts_with("Debug-RecursiveMaze"));
    }

    #[test]
    fn identical_label_sets_are_complete() {
        let base = lv(&CanonicalLabel::ALL.map(|l| (l, 20.0)));
        let cand = lv(&CanonicalLabel::ALL.map(|l| (l, 15.0)));
        let cmp = Comparison::join(&base, &cand);
        assert_eq!(cmp.len(), 4);
        assert!(cmp.ensure_complete().is_ok());
        for e in cmp.entries() {
            assert_eq!(e.outcome.percent(), Some(-25.0));
            assert_eq!(e.outcome.annotation(), "-25%");
        }
    }

    #[test]
    fn labels_absent_from_both_are_omitted() {
        let cmp = Comparison::join(&LastValues::default(), &LastValues::default());
        assert!(cmp.is_empty());
        assert_eq!(cmp.max_time(), None);
        assert!(cmp.ensure_complete().is_ok());
    }
}
