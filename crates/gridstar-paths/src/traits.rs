use gridstar_core::{Cell, Grid, OutOfBounds};

/// Read-only grid interface consumed by the search engine.
pub trait GridModel {
    /// Grid extents as `(rows, cols)`.
    fn dimensions(&self) -> (i32, i32);

    /// Whether `cell` is passable. Fails if `cell` is outside the grid.
    fn is_passable(&self, cell: Cell) -> Result<bool, OutOfBounds>;

    /// Append the in-bounds passable neighbors of `cell` into `buf`, in
    /// south, north, east, west order. The caller clears `buf` before calling.
    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>);
}

impl GridModel for Grid {
    #[inline]
    fn dimensions(&self) -> (i32, i32) {
        Grid::dimensions(self)
    }

    #[inline]
    fn is_passable(&self, cell: Cell) -> Result<bool, OutOfBounds> {
        Grid::is_passable(self, cell)
    }

    fn neighbors(&self, cell: Cell, buf: &mut Vec<Cell>) {
        buf.extend(self.passable_neighbors(cell));
    }
}
