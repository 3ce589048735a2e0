//! Terminal presentation of gridstar searches.
//!
//! Renders a grid, the exploration trace and the resulting path into a
//! [`Canvas`], then writes it either as coloured blocks (via crossterm) or as
//! plain ASCII glyphs.

pub mod color;
pub mod render;

pub use color::{Color, Palette, gradient, path_colors};
pub use render::{Canvas, Mode, Tile, paint, parse_cell, write_canvas};
