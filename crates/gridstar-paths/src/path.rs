use gridstar_core::Cell;

use crate::traits::GridModel;

/// Edge count of a path, or `None` for an empty path.
pub fn path_cost(path: &[Cell]) -> Option<u32> {
    path.len().checked_sub(1).map(|n| n as u32)
}

/// Whether `path` is non-empty, every cell is in bounds and passable, and each
/// consecutive pair is one axis-aligned step apart.
pub fn validate_path<G: GridModel>(grid: &G, path: &[Cell]) -> bool {
    !path.is_empty()
        && path.iter().all(|&c| grid.is_passable(c).unwrap_or(false))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
