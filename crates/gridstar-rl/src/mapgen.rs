//! Random obstacle layouts.

use gridstar_core::{Cell, CellState, Grid};
use rand::Rng;

/// Obstacle probability used by the visualizer's "random maze" action.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Layout generator operating on a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Re-roll every cell: obstacle with probability `density` (clamped to
    /// 0.0–1.0), passable otherwise.
    ///
    /// Returns the number of obstacles placed.
    pub fn random_obstacles(&mut self, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        for c in self.grid.bounds() {
            let r: f64 = self.rng.random();
            let state = if r < density {
                CellState::Obstacle
            } else {
                CellState::Passable
            };
            self.grid.set(c, state);
        }
        let obstacles = self.grid.count(CellState::Obstacle);
        log::debug!(
            "mapgen: {obstacles} obstacles on {} cells (density {density})",
            self.grid.bounds().len()
        );
        obstacles
    }

    /// Pick a uniformly random passable cell, or `None` if there is none.
    pub fn random_passable(&mut self) -> Option<Cell> {
        let open = self.grid.count(CellState::Passable);
        if open == 0 {
            return None;
        }
        let k = self.rng.random_range(0..open);
        self.grid
            .iter()
            .filter(|(_, s)| s.is_passable())
            .nth(k)
            .map(|(c, _)| c)
    }

    /// Pick two distinct random passable cells for start and goal.
    pub fn random_endpoints(&mut self) -> Option<(Cell, Cell)> {
        if self.grid.count(CellState::Passable) < 2 {
            return None;
        }
        let start = self.random_passable()?;
        loop {
            let goal = self.random_passable()?;
            if goal != start {
                return Some((start, goal));
            }
        }
    }

    /// Consume the generator and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn density_extremes() {
        let mut mg = MapGen::with_grid(Grid::new(10, 10), rand::rng());
        assert_eq!(mg.random_obstacles(0.0), 0);
        assert_eq!(mg.random_obstacles(1.0), 100);
        assert_eq!(mg.random_passable(), None);
        assert_eq!(mg.random_endpoints(), None);
    }

    #[test]
    fn default_density_produces_mixed_grid() {
        let mut mg = MapGen::with_grid(Grid::new(25, 30), StdRng::seed_from_u64(1));
        let n = mg.random_obstacles(DEFAULT_DENSITY);
        let total = 25 * 30;
        assert!(n > 0 && n < total / 2, "{n} obstacles");
    }

    #[test]
    fn same_seed_same_layout() {
        let make = |seed| {
            let mut mg = MapGen::with_grid(Grid::new(8, 8), StdRng::seed_from_u64(seed));
            mg.random_obstacles(0.3);
            mg.into_grid()
        };
        assert_eq!(make(42), make(42));
    }

    #[test]
    fn endpoints_are_distinct_and_passable() {
        let mut mg = MapGen::with_grid(Grid::new(6, 6), StdRng::seed_from_u64(3));
        mg.random_obstacles(0.5);
        for _ in 0..20 {
            let (s, g) = mg.random_endpoints().unwrap();
            assert_ne!(s, g);
            assert_eq!(mg.grid.at(s), Some(CellState::Passable));
            assert_eq!(mg.grid.at(g), Some(CellState::Passable));
        }
    }

    #[test]
    fn single_open_cell_has_no_endpoint_pair() {
        let mut grid = Grid::new(3, 3);
        grid.fill(CellState::Obstacle);
        grid.set(Cell::new(1, 1), CellState::Passable);
        let mut mg = MapGen::with_grid(grid, StdRng::seed_from_u64(0));
        assert_eq!(mg.random_passable(), Some(Cell::new(1, 1)));
        assert_eq!(mg.random_endpoints(), None);
    }
}
