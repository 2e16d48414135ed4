// File: crates/bench-series/src/label.rs
// Summary: Closed set of canonical labels and the MazeType classifier.

use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// Build configuration x algorithm. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalLabel {
    DebugHuntKill,
    DebugRecursiveMaze,
    ReleaseHuntKill,
    ReleaseRecursiveMaze,
}

impl CanonicalLabel {
    pub const ALL: [CanonicalLabel; 4] = [
        CanonicalLabel::DebugHuntKill,
        CanonicalLabel::DebugRecursiveMaze,
        CanonicalLabel::ReleaseHuntKill,
        CanonicalLabel::ReleaseRecursiveMaze,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CanonicalLabel::DebugHuntKill => "Debug-HuntKill",
            CanonicalLabel::DebugRecursiveMaze => "Debug-RecursiveMaze",
            CanonicalLabel::ReleaseHuntKill => "Release-HuntKill",
            CanonicalLabel::ReleaseRecursiveMaze => "Release-RecursiveMaze",
        }
    }

    /// Position in [`CanonicalLabel::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classify a raw MazeType by substring.
    ///
    /// `Debug` is tested before `Release`, and `HuntKill` before
    /// `RecursiveMaze`, so `"Release-HuntKillMazeGen-17"` is
    /// `Release-HuntKill`. Anything else is an error carrying the raw text.
    pub fn classify(maze_type: &str) -> Result<Self, ClassifyError> {
        let debug = if maze_type.contains("Debug") {
            true
        } else if maze_type.contains("Release") {
            false
        } else {
            return Err(ClassifyError::UnknownBuild(maze_type.to_string()));
        };

        let label = match (debug, algorithm(maze_type)) {
            (true, Some(Algorithm::HuntKill)) => CanonicalLabel::DebugHuntKill,
            (true, Some(Algorithm::RecursiveMaze)) => CanonicalLabel::DebugRecursiveMaze,
            (false, Some(Algorithm::HuntKill)) => CanonicalLabel::ReleaseHuntKill,
            (false, Some(Algorithm::RecursiveMaze)) => CanonicalLabel::ReleaseRecursiveMaze,
            (_, None) => return Err(ClassifyError::UnknownAlgorithm(maze_type.to_string())),
        };
        Ok(label)
    }
}

enum Algorithm {
    HuntKill,
    RecursiveMaze,
}

fn algorithm(maze_type: &str) -> Option<Algorithm> {
    if maze_type.contains("HuntKill") {
        Some(Algorithm::HuntKill)
    } else if maze_type.contains("RecursiveMaze") {
        Some(Algorithm::RecursiveMaze)
    } else {
        None
    }
}

impl fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact label text (as printed by `Display`), not raw MazeTypes.
impl FromStr for CanonicalLabel {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalLabel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ClassifyError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_harness_names() {
        assert_eq!(CanonicalLabel::classify("Debug-HuntKillMazeGen-5").unwrap(), CanonicalLabel::DebugHuntKill);
        assert_eq!(CanonicalLabel::classify("Debug-RecursiveMazeGen-255").unwrap(), CanonicalLabel::DebugRecursiveMaze);
        assert_eq!(CanonicalLabel::classify("Release-HuntKillMazeGen-7").unwrap(), CanonicalLabel::ReleaseHuntKill);
        assert_eq!(CanonicalLabel::classify("Release-RecursiveMazeGen-9").unwrap(), CanonicalLabel::ReleaseRecursiveMaze);
    }

    #[test]
    fn debug_wins_over_release() {
        let l = CanonicalLabel::classify("Release-Debug-RecursiveMaze").unwrap();
        assert_eq!(l, CanonicalLabel::DebugRecursiveMaze);
    }

    #[test]
    fn unknown_build_and_algorithm_are_distinct() {
        assert_eq!(
            CanonicalLabel::classify("Profile-HuntKill"),
            Err(ClassifyError::UnknownBuild("Profile-HuntKill".into()))
        );
        let err = CanonicalLabel::classify("Release-Prim-5").unwrap_err();
        assert_eq!(err, ClassifyError::UnknownAlgorithm("Release-Prim-5".into()));
        assert_eq!(err.maze_type(), "Release-Prim-5");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for l in CanonicalLabel::ALL {
            assert_eq!(l.to_string().parse::<CanonicalLabel>().unwrap(), l);
            assert_eq!(CanonicalLabel::ALL[l.index()], l);
        }
        assert_eq!(
            "Debug-HuntKillMazeGen-5".parse::<CanonicalLabel>(),
            Err(ClassifyError::UnknownLabel("Debug-HuntKillMazeGen-5".into()))
        );
    }
}
