//! A* shortest-path search on obstacle grids.
//!
//! The entry point is [`search`], which takes any [`GridModel`] snapshot plus
//! a start and goal [`Cell`](gridstar_core::Cell) and returns the optimal
//! path together with a [`Trace`] of exploration events:
//!
//! - a cell is traced as [`Phase::AddedToFrontier`] each time a strictly
//!   better cost for it is found and it is pushed onto the frontier;
//! - a cell is traced as [`Phase::Finalized`] once, when it is expanded.
//!
//! [`search_with`] runs the same algorithm under a [`SearchConfig`]
//! (heuristic choice, expansion cap) and reports a [`SearchOutcome`] with
//! statistics.
//!
//! Movement is 4-directional with unit step cost. Neighbors are enumerated
//! south, north, east, west; frontier ties are broken first-in-first-out, so
//! repeated searches over the same grid yield the same path and trace.

mod astar;
mod config;
mod cost;
mod distance;
mod error;
mod frontier;
mod path;
mod trace;
mod traits;

pub use astar::{SearchOutcome, search, search_with};
pub use config::SearchConfig;
pub use distance::{Heuristic, UnknownHeuristic, euclidean, manhattan};
pub use error::SearchError;
pub use path::{path_cost, validate_path};
pub use trace::{Phase, Trace, TraceEvent};
pub use traits::GridModel;
