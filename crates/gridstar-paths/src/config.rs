use crate::distance::Heuristic;

/// Options for [`search_with`](crate::search_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Remaining-cost estimate. Defaults to [`Heuristic::Euclidean`].
    pub heuristic: Heuristic,
    /// Stop once this many cells have been finalized without reaching the
    /// goal. `None` means unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Set the heuristic (builder).
    #[inline]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cap the number of expansions (builder).
    #[inline]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
