//! The [`Grid`] type: a fixed-size rectangle of passable and obstacle cells.
//!
//! A `Grid` owns its storage. Cloning yields an independent snapshot, which
//! is what a search is handed: the engine only ever borrows it immutably.

use std::fmt;

use crate::geom::{Cell, Range};

/// State of a single grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Passable,
    Obstacle,
}

impl CellState {
    /// Whether a path may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }

    /// The opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Passable => Self::Obstacle,
            Self::Obstacle => Self::Passable,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular matrix of [`CellState`]s with bounds `[0,rows)×[0,cols)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Range,
}

impl Grid {
    /// Create a new all-passable grid. Negative dimensions are clamped to 0.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            cells: vec![CellState::Passable; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from row-major states.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_states(rows: &[Vec<CellState>]) -> Option<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let bounds = Range::with_size(rows.len() as i32, ncols as i32);
        Some(Self {
            cells: rows.iter().flatten().copied().collect(),
            bounds,
        })
    }

    /// Grid extents as `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.bounds.rows(), self.bounds.cols())
    }

    /// The bounding range.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    fn index(&self, c: Cell) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.bounds.cols() as usize) + c.col as usize)
    }

    /// Read the state at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is passable. Fails if `c` lies outside the grid.
    pub fn is_passable(&self, c: Cell) -> Result<bool, OutOfBounds> {
        self.at(c)
            .map(CellState::is_passable)
            .ok_or_else(|| self.out_of_bounds(c))
    }

    /// In-bounds passable neighbors of `c` in south, north, east, west order.
    pub fn passable_neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(|&n| self.at(n).is_some_and(CellState::is_passable))
    }

    /// Set the state at `c`. No-op if out of bounds.
    pub fn set(&mut self, c: Cell, state: CellState) {
        if let Some(i) = self.index(c) {
            self.cells[i] = state;
        }
    }

    /// Flip `c` between passable and obstacle, returning the new state.
    pub fn toggle_obstacle(&mut self, c: Cell) -> Option<CellState> {
        let i = self.index(c)?;
        self.cells[i] = self.cells[i].toggled();
        Some(self.cells[i])
    }

    /// Make every cell passable.
    pub fn clear(&mut self) {
        self.fill(CellState::Passable);
    }

    /// Fill every cell with `state`.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Count how many cells equal `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Row-major iterator over `(Cell, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    fn out_of_bounds(&self, cell: Cell) -> OutOfBounds {
        let (rows, cols) = self.dimensions();
        OutOfBounds { cell, rows, cols }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Repr {
            cells: Vec<CellState>,
            bounds: Range,
        }

        let Repr { cells, bounds } = Repr::deserialize(deserializer)?;
        // Bounds must start at the origin and hold exactly one state per cell.
        if bounds != Range::with_size(bounds.max.row, bounds.max.col) {
            return Err(D::Error::custom(format!(
                "grid bounds {bounds} do not start at (0, 0)"
            )));
        }
        if cells.len() != bounds.len() {
            return Err(D::Error::custom(format!(
                "grid bounds {bounds} need {} cells, found {}",
                bounds.len(),
                cells.len()
            )));
        }
        Ok(Self { cells, bounds })
    }
}

/// A cell coordinate lies outside `[0,rows)×[0,cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub cell: Cell,
    pub rows: i32,
    pub cols: i32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {} is outside the {}x{} grid",
            self.cell, self.rows, self.cols
        )
    }
}

impl std::error::Error for OutOfBounds {}
