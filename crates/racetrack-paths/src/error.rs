use racetrack_core::Point;
use thiserror::Error;

/// Caller contract violations detected before a search starts.
///
/// Not finding a path is not an error; see
/// [`SearchStatus::Exhausted`](crate::SearchStatus::Exhausted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("velocity bound must be non-negative, got {0}")]
    InvalidVmax(i32),
    #[error("start position {pos} is outside the track bounds")]
    StartOutOfBounds { pos: Point },
    #[error("start position {pos} is not drivable")]
    StartOffTrack { pos: Point },
    #[error("start velocity {vel} exceeds the velocity bound {vmax}")]
    StartVelocityOutOfRange { vel: Point, vmax: i32 },
}
