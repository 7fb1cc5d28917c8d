//! Minimal-step path search for a point vehicle on a racetrack.
//!
//! The vehicle's state is a position plus a velocity ([`KinematicState`]).
//! Each step it may change every velocity component by at most one, then
//! moves by the new velocity along a straight line that must not cross an
//! off-track cell. [`explore`] runs a breadth-first search over this implicit
//! state graph and stops at the first state sitting on a finish cell, which
//! is reached in the fewest possible steps.
//!
//! - **Line of sight** over rasterised segments ([`Line`], [`line_of_sight`])
//! - **Move generation** under the acceleration bound ([`Moves`])
//! - **BFS** with predecessor bookkeeping ([`explore`], [`find_path`])
//! - **Path reconstruction** ([`PredecessorMap::trace_back`])
//!
//! The search reads the grid only through [`TrackView`], which
//! [`racetrack_core::Track`] implements.

mod bfs;
mod config;
mod error;
mod line;
mod moves;
mod predecessors;
mod state;
mod traits;

pub use bfs::{Exploration, SearchStats, SearchStatus, explore, find_path};
pub use config::{DEFAULT_VMAX, SearchConfig};
pub use error::SearchError;
pub use line::{Line, line_of_sight};
pub use moves::{Moves, for_each_move};
pub use predecessors::PredecessorMap;
pub use state::KinematicState;
pub use traits::TrackView;
