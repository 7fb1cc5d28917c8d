use std::fmt;

use racetrack_core::Point;

/// Position and velocity of the vehicle at one step.
///
/// States order lexicographically by row, column, row velocity and column
/// velocity, so they can key ordered containers as well as hashed ones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicState {
    // Field order drives the derived `Ord`; `Point` itself orders by row first.
    pos: Point,
    vel: Point,
}

impl KinematicState {
    /// Create a state from row/column position and velocity components.
    #[inline]
    pub const fn new(row: i32, col: i32, vrow: i32, vcol: i32) -> Self {
        Self {
            pos: Point::from_row_col(row, col),
            vel: Point::from_row_col(vrow, vcol),
        }
    }

    /// Create a state from a position and a velocity.
    #[inline]
    pub const fn from_parts(pos: Point, vel: Point) -> Self {
        Self { pos, vel }
    }

    /// A stationary vehicle at `pos`.
    #[inline]
    pub const fn at_rest(pos: Point) -> Self {
        Self {
            pos,
            vel: Point::ZERO,
        }
    }

    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn vel(self) -> Point {
        self.vel
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn vrow(self) -> i32 {
        self.vel.y
    }

    #[inline]
    pub const fn vcol(self) -> i32 {
        self.vel.x
    }

    /// Whether both velocity components lie in `[-vmax, vmax]`.
    #[inline]
    pub fn within_speed(self, vmax: i32) -> bool {
        self.vel.x.abs() <= vmax && self.vel.y.abs() <= vmax
    }
}

impl fmt::Display for KinematicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r={}, c={}, vr={}, vc={})",
            self.row(),
            self.col(),
            self.vrow(),
            self.vcol()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn accessors() {
        let s = KinematicState::new(1, 2, -3, 4);
        assert_eq!(s.row(), 1);
        assert_eq!(s.col(), 2);
        assert_eq!(s.vrow(), -3);
        assert_eq!(s.vcol(), 4);
        assert_eq!(s.pos(), Point::new(2, 1));
        assert_eq!(s.vel(), Point::new(4, -3));
        assert_eq!(s.to_string(), "(r=1, c=2, vr=-3, vc=4)");
    }

    #[test]
    fn equality_needs_all_fields() {
        let a = KinematicState::new(1, 1, 0, 0);
        assert_eq!(a, KinematicState::at_rest(Point::new(1, 1)));
        assert_ne!(a, KinematicState::new(1, 1, 0, 1));
        assert_ne!(a, KinematicState::new(1, 1, 1, 0));
        assert_ne!(a, KinematicState::new(1, 2, 0, 0));

        let set: HashSet<_> = [a, a, KinematicState::new(1, 1, 0, 1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn orders_row_col_vrow_vcol() {
        let states = [
            KinematicState::new(1, 0, 0, 0),
            KinematicState::new(0, 1, -1, 0),
            KinematicState::new(0, 1, -2, 5),
            KinematicState::new(0, 1, -2, 3),
            KinematicState::new(0, 2, -9, -9),
        ];
        let sorted: Vec<_> = states.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        assert_eq!(
            sorted,
            vec![
                KinematicState::new(0, 1, -2, 3),
                KinematicState::new(0, 1, -2, 5),
                KinematicState::new(0, 1, -1, 0),
                KinematicState::new(0, 2, -9, -9),
                KinematicState::new(1, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn speed_bound() {
        assert!(KinematicState::new(0, 0, 3, -3).within_speed(3));
        assert!(!KinematicState::new(0, 0, 3, -4).within_speed(3));
        assert!(KinematicState::new(0, 0, 0, 0).within_speed(0));
    }
}
