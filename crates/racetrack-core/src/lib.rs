//! **racetrack-core** — grid types for the racetrack path planner.
//!
//! This crate provides the track side of the planner: geometry primitives,
//! the [`CellKind`] classification, the [`Track`] grid itself and the two
//! on-disk track formats (an ASCII layout and PPM images).

pub mod cell;
pub mod geom;
pub mod ppm;
pub mod track;

pub use cell::CellKind;
pub use geom::{Point, Range};
pub use ppm::{PpmError, read_ppm, write_ppm};
pub use track::{Track, TrackError};
