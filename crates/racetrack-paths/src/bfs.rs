use std::collections::VecDeque;

use racetrack_core::CellKind;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::moves::Moves;
use crate::predecessors::PredecessorMap;
use crate::state::KinematicState;
use crate::traits::TrackView;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// A state on a finish cell was reached; it is the terminal state.
    Found(KinematicState),
    /// Every reachable state was expanded without reaching a finish cell.
    Exhausted,
    /// The expansion budget ran out first.
    Aborted,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States popped from the frontier.
    pub processed: usize,
    /// States pushed onto the frontier, the start included.
    pub enqueued: usize,
    /// Distinct states discovered (the predecessor map's size).
    pub discovered: usize,
    /// Successor candidates checked against the predecessor map.
    pub lookups: usize,
}

/// Everything a finished search produced.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub status: SearchStatus,
    pub predecessors: PredecessorMap,
    pub stats: SearchStats,
}

impl Exploration {
    /// The terminal state, if a finish cell was reached.
    pub fn terminal(&self) -> Option<KinematicState> {
        match self.status {
            SearchStatus::Found(s) => Some(s),
            _ => None,
        }
    }

    /// The start-to-finish path, or an empty vector when none was found.
    pub fn path(&self) -> Vec<KinematicState> {
        self.terminal()
            .map(|t| self.predecessors.trace_back(t))
            .unwrap_or_default()
    }
}

fn check_start<T: TrackView + ?Sized>(
    track: &T,
    start: KinematicState,
    vmax: i32,
) -> Result<(), SearchError> {
    if vmax < 0 {
        return Err(SearchError::InvalidVmax(vmax));
    }
    let pos = start.pos();
    if !track.in_bounds(pos) {
        return Err(SearchError::StartOutOfBounds { pos });
    }
    if !track.classify(pos).is_drivable() {
        return Err(SearchError::StartOffTrack { pos });
    }
    if !start.within_speed(vmax) {
        return Err(SearchError::StartVelocityOutOfRange {
            vel: start.vel(),
            vmax,
        });
    }
    Ok(())
}

/// Breadth-first search from `start` to the nearest finish cell.
///
/// Every move costs one step, so the first time a state is discovered its
/// recorded predecessor lies on a shortest route to it, and the first
/// finish state popped is reached in the fewest moves possible.
///
/// Fails only when `start` or `config` break the caller contract; running
/// out of states is reported as [`SearchStatus::Exhausted`].
pub fn explore<T: TrackView + ?Sized>(
    track: &T,
    start: KinematicState,
    config: &SearchConfig,
) -> Result<Exploration, SearchError> {
    check_start(track, start, config.vmax)?;
    log::debug!(
        "bfs: start {} on {}x{} track, vmax {}",
        start,
        track.width(),
        track.height(),
        config.vmax
    );

    let mut predecessors = PredecessorMap::with_start(start);
    let mut frontier: VecDeque<KinematicState> = VecDeque::new();
    frontier.push_back(start);

    let mut stats = SearchStats {
        enqueued: 1,
        ..SearchStats::default()
    };
    let mut moves = Moves::new();

    let status = loop {
        let Some(state) = frontier.pop_front() else {
            break SearchStatus::Exhausted;
        };
        // Only a search with states left to expand can be cut short.
        if config.max_expansions.is_some_and(|max| stats.processed >= max) {
            break SearchStatus::Aborted;
        }
        stats.processed += 1;

        if track.classify(state.pos()) == CellKind::Finish {
            break SearchStatus::Found(state);
        }

        for &next in moves.successors(track, state, config.vmax) {
            stats.lookups += 1;
            if predecessors.discover(next, state) {
                frontier.push_back(next);
                stats.enqueued += 1;
            }
        }
    };

    stats.discovered = predecessors.len();
    log::debug!(
        "bfs: {:?} after processing {} states ({} added, {} lookups)",
        status,
        stats.processed,
        stats.discovered,
        stats.lookups
    );

    Ok(Exploration {
        status,
        predecessors,
        stats,
    })
}

/// Shortest path from `start` to any finish cell with velocity bound
/// `vmax`. An empty vector means no finish cell is reachable.
pub fn find_path<T: TrackView + ?Sized>(
    track: &T,
    start: KinematicState,
    vmax: i32,
) -> Result<Vec<KinematicState>, SearchError> {
    Ok(explore(track, start, &SearchConfig::new(vmax))?.path())
}
