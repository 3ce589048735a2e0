//! **gridstar-core**: grid model types for the *gridstar* pathfinder.
//!
//! This crate provides the foundational types shared by the search engine
//! and its collaborators: the [`Cell`] coordinate, the half-open [`Range`]
//! rectangle, and the [`Grid`] of passable/obstacle [`CellState`]s.

pub mod geom;
pub mod grid;

pub use geom::{Cell, Range, RangeIter};
pub use grid::{CellState, Grid, OutOfBounds};
