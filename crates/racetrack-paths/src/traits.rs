use racetrack_core::{CellKind, Point, Track};

/// Read-only view of a track, as seen by the search.
///
/// Implementations must not change while a search is running.
pub trait TrackView {
    /// Whether `p` is a valid grid coordinate.
    fn in_bounds(&self, p: Point) -> bool;

    /// Classification of the cell at `p`. Only called for in-bounds points.
    fn classify(&self, p: Point) -> CellKind;

    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Whether `p` is in bounds and not off the track.
    #[inline]
    fn is_drivable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.classify(p).is_drivable()
    }
}

impl TrackView for Track {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.contains(p)
    }

    #[inline]
    fn classify(&self, p: Point) -> CellKind {
        self.at(p).unwrap_or(CellKind::Outside)
    }

    #[inline]
    fn width(&self) -> i32 {
        Track::width(self)
    }

    #[inline]
    fn height(&self) -> i32 {
        Track::height(self)
    }
}
