use std::fmt;
use std::str::FromStr;

use gridstar_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Remaining-cost estimate used to order the frontier.
///
/// All variants are admissible and consistent for unit-cost 4-way movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// L1 distance; the exact remaining cost on an open grid.
    Manhattan,
    /// Always 0, which turns A* into uniform-cost search.
    Zero,
}

impl Heuristic {
    /// Estimate the distance from `cell` to `goal`. Returns 0 if there is no
    /// goal.
    #[inline]
    pub fn estimate(self, cell: Cell, goal: Option<Cell>) -> f64 {
        let Some(goal) = goal else {
            return 0.0;
        };
        match self {
            Self::Euclidean => euclidean(cell, goal),
            Self::Manhattan => f64::from(manhattan(cell, goal)),
            Self::Zero => 0.0,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Zero => "zero",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "zero" | "dijkstra" => Ok(Self::Zero),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

/// A heuristic name that [`Heuristic::from_str`] does not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic \u{201c}{}\u{201d} (expected euclidean, manhattan or zero)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}
