//! The [`Track`] grid and its ASCII text format.
//!
//! A `Track` is a fixed-size, row-major grid of [`CellKind`]s. The search
//! only ever reads it; [`mark_trace`](Track::mark_trace) exists so a driver
//! can paint a finished path back onto the map before saving it.
//!
//! ## ASCII format
//!
//! ```text
//! ##########
//! #S......F#
//! ##########
//! ```
//!
//! One line per row, `#` outside, `.` road, `S` start, `F` finish, `*` trace.
//! Every line must have the same width.

use std::fmt;

use thiserror::Error;

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// Errors produced while parsing an ASCII track.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The input had no cells at all.
    #[error("track: empty layout")]
    Empty,
    /// A line's width differs from the first line's width.
    #[error("track: line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the track alphabet was found.
    #[error("track: invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

/// A racetrack: a rectangular grid of [`CellKind`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl Track {
    /// Create a new track filled with [`CellKind::Outside`].
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![CellKind::Outside; (w as usize) * (h as usize)],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// Build a track from row-major cells. Returns `None` when `cells`
    /// does not hold exactly `width * height` entries.
    pub fn from_cells(width: i32, height: i32, cells: Vec<CellKind>) -> Option<Self> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if cells.len() != bounds.len() {
            return None;
        }
        Some(Self { cells, bounds })
    }

    /// Parse the ASCII format. Leading and trailing whitespace of the whole
    /// input is ignored, but not of individual lines.
    pub fn from_ascii(s: &str) -> Result<Self, TrackError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TrackError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width: Option<usize> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                let kind = CellKind::from_char(ch).ok_or(TrackError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(kind);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(TrackError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(TrackError::Empty);
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height),
        })
    }

    /// Render the track in the ASCII format (no trailing newline).
    pub fn to_ascii(&self) -> String {
        let w = self.width() as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for (i, row) in self.cells.chunks(w.max(1)).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|k| k.to_char()));
        }
        out
    }

    /// The bounding range of the track.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }

    /// Cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = kind;
        }
    }

    /// Fill the whole track with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells have the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// First point of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Point> {
        self.iter().find(|&(_, k)| k == kind).map(|(p, _)| p)
    }

    /// Mark every in-bounds point as [`CellKind::Trace`].
    pub fn mark_trace(&mut self, points: impl IntoIterator<Item = Point>) {
        for p in points {
            self.set(p, CellKind::Trace);
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVAL: &str = "\
#######
#S...F#
#.###.#
#.....#
#######";

    #[test]
    fn new_is_all_outside() {
        let t = Track::new(4, 3);
        assert_eq!(t.width(), 4);
        assert_eq!(t.height(), 3);
        assert_eq!(t.count(CellKind::Outside), 12);
        assert_eq!(t.at(Point::new(3, 2)), Some(CellKind::Outside));
        assert_eq!(t.at(Point::new(4, 0)), None);
        assert_eq!(t.at(Point::new(0, -1)), None);
    }

    #[test]
    fn negative_size_clamps() {
        let t = Track::new(-2, 5);
        assert_eq!(t.width(), 0);
        assert!(t.bounds().is_empty());
        assert!(t.cells().is_empty());
    }

    #[test]
    fn parse_ascii() {
        let t = Track::from_ascii(OVAL).unwrap();
        assert_eq!(t.width(), 7);
        assert_eq!(t.height(), 5);
        assert_eq!(t.at(Point::new(1, 1)), Some(CellKind::Start));
        assert_eq!(t.at(Point::new(5, 1)), Some(CellKind::Finish));
        assert_eq!(t.at(Point::new(3, 2)), Some(CellKind::Outside));
        assert_eq!(t.count(CellKind::Road), 10);
        assert_eq!(t.to_ascii(), OVAL);
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = Track::from_ascii("S..\n..\n..F").unwrap_err();
        assert_eq!(
            err,
            TrackError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = Track::from_ascii("S.\n.x").unwrap_err();
        assert_eq!(
            err,
            TrackError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Track::from_ascii("  \n "), Err(TrackError::Empty));
    }

    #[test]
    fn find_is_row_major() {
        let t = Track::from_ascii("..F\nF..").unwrap();
        assert_eq!(t.find(CellKind::Finish), Some(Point::new(2, 0)));
        assert_eq!(t.find(CellKind::Start), None);
    }

    #[test]
    fn from_cells_checks_len() {
        assert!(Track::from_cells(2, 2, vec![CellKind::Road; 3]).is_none());
        let t = Track::from_cells(2, 1, vec![CellKind::Start, CellKind::Finish]).unwrap();
        assert_eq!(t.to_ascii(), "SF");
    }

    #[test]
    fn mark_trace_skips_out_of_bounds() {
        let mut t = Track::from_ascii("S..F").unwrap();
        t.mark_trace([Point::new(0, 0), Point::new(2, 0), Point::new(9, 9)]);
        assert_eq!(t.to_ascii(), "*.*F");
    }

    #[test]
    fn set_and_fill() {
        let mut t = Track::new(3, 1);
        t.fill(CellKind::Road);
        t.set(Point::new(1, 0), CellKind::Finish);
        t.set(Point::new(5, 0), CellKind::Start);
        assert_eq!(t.to_string(), ".F.");
    }
}
