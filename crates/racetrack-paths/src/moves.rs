use racetrack_core::Point;

use crate::line::line_of_sight;
use crate::state::KinematicState;
use crate::traits::TrackView;

/// Call `f` with every valid successor of `state`.
///
/// Each velocity component may change by at most one per step, clamped to
/// `[-vmax, vmax]`. The vehicle then moves by the *new* velocity. A move is
/// valid when the target cell is in bounds and drivable and the straight
/// line from the current cell to the target crosses no off-track cell.
///
/// Successors come in ascending row velocity, then ascending column
/// velocity.
pub fn for_each_move<T: TrackView + ?Sized>(
    track: &T,
    state: KinematicState,
    vmax: i32,
    mut f: impl FnMut(KinematicState),
) {
    let from = state.pos();
    let vel = state.vel();
    let (vrow_lo, vrow_hi) = ((vel.y - 1).max(-vmax), (vel.y + 1).min(vmax));
    let (vcol_lo, vcol_hi) = ((vel.x - 1).max(-vmax), (vel.x + 1).min(vmax));

    for vrow in vrow_lo..=vrow_hi {
        for vcol in vcol_lo..=vcol_hi {
            let nvel = Point::from_row_col(vrow, vcol);
            let to = from + nvel;
            if track.is_drivable(to) && line_of_sight(from, to, |p| track.is_drivable(p)) {
                f(KinematicState::from_parts(to, nvel));
            }
        }
    }
}

/// Cached successor computation helper.
///
/// Reuses one buffer across calls, the way a search loop expands many
/// states in a row.
pub struct Moves {
    buf: Vec<KinematicState>,
}

impl Default for Moves {
    fn default() -> Self {
        Self::new()
    }
}

impl Moves {
    /// Create a new `Moves` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(9),
        }
    }

    /// Return the valid successors of `state`, in the order of
    /// [`for_each_move`].
    pub fn successors<T: TrackView + ?Sized>(
        &mut self,
        track: &T,
        state: KinematicState,
        vmax: i32,
    ) -> &[KinematicState] {
        self.buf.clear();
        let buf = &mut self.buf;
        for_each_move(track, state, vmax, |s| buf.push(s));
        &self.buf
    }
}
