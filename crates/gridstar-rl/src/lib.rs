//! Grid editing utilities for gridstar: random layouts and text layouts.

pub mod layout;
pub mod mapgen;

pub use layout::{Layout, LayoutError};
pub use mapgen::{DEFAULT_DENSITY, MapGen};
