use std::fmt;

use gridstar_core::{Cell, OutOfBounds};

/// Reasons a search call is rejected before it starts.
///
/// An unreachable goal is not an error: it yields an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
    /// An endpoint is an obstacle.
    InvalidEndpoint { cell: Cell },
}

impl SearchError {
    /// The offending endpoint.
    pub fn cell(&self) -> Cell {
        match *self {
            Self::OutOfBounds { cell, .. } | Self::InvalidEndpoint { cell } => cell,
        }
    }
}

impl From<OutOfBounds> for SearchError {
    fn from(e: OutOfBounds) -> Self {
        Self::OutOfBounds {
            cell: e.cell,
            rows: e.rows,
            cols: e.cols,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "search: endpoint {cell} is outside the {rows}x{cols} grid")
            }
            Self::InvalidEndpoint { cell } => {
                write!(f, "search: endpoint {cell} is an obstacle")
            }
        }
    }
}

impl std::error::Error for SearchError {}
