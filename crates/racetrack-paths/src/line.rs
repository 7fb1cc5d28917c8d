use std::iter::FusedIterator;

use racetrack_core::Point;

/// Lazy integer rasterisation of the segment between two grid points.
///
/// Yields every cell of the 8-connected line from `from` to `to`, both
/// endpoints included. The row axis is stepped first, so the cells visited
/// for a given pair of endpoints are fixed; reversing the endpoints may
/// choose different cells on ties.
///
/// Consumers may stop pulling at any point; cloning or calling
/// [`Line::new`] again restarts the walk.
#[derive(Debug, Clone)]
pub struct Line {
    cur: Point,
    end: Point,
    drow: i32,
    dcol: i32,
    srow: i32,
    scol: i32,
    err: i32,
    done: bool,
}

impl Line {
    /// Start a walk from `from` to `to`.
    pub fn new(from: Point, to: Point) -> Self {
        let drow = (to.y - from.y).abs();
        let dcol = (to.x - from.x).abs();
        let srow = if from.y < to.y { 1 } else { -1 };
        let scol = if from.x < to.x { 1 } else { -1 };
        // Truncating division: the accumulator starts at half the dominant delta.
        let err = (if drow > dcol { drow } else { -dcol }) / 2;
        Self {
            cur: from,
            end: to,
            drow,
            dcol,
            srow,
            scol,
            err,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = self.err;
        if e2 > -self.drow {
            self.err -= self.dcol;
            self.cur.y += self.srow;
        }
        if e2 < self.dcol {
            self.err += self.drow;
            self.cur.x += self.scol;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let d = self.end - self.cur;
        let rest = d.x.abs().max(d.y.abs()) as usize + 1;
        // Each step advances at most one cell per axis and at least one overall.
        (rest, Some(d.x.abs() as usize + d.y.abs() as usize + 1))
    }
}

impl FusedIterator for Line {}

/// Whether every cell on the line from `from` to `to` satisfies `clear`.
///
/// Cells are tested in walk order, endpoints included, and the walk stops
/// at the first cell that fails.
#[inline]
pub fn line_of_sight(from: Point, to: Point, clear: impl FnMut(Point) -> bool) -> bool {
    Line::new(from, to).all(clear)
}
