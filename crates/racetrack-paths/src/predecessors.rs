use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::state::KinematicState;

/// First-discovery predecessor of every state a search has reached.
///
/// The map doubles as the visited set: a state is known once it has a key.
/// The start state maps to `None`. Every other key maps to a state that was
/// inserted before it, so following predecessors always ends at the start.
#[derive(Debug, Clone, Default)]
pub struct PredecessorMap {
    prev: HashMap<KinematicState, Option<KinematicState>>,
}

impl PredecessorMap {
    /// A map holding only `start`, with no predecessor.
    pub fn with_start(start: KinematicState) -> Self {
        let mut prev = HashMap::new();
        prev.insert(start, None);
        Self { prev }
    }

    /// Record `from` as the predecessor of `state` unless `state` is
    /// already known. Returns `true` when `state` is new.
    ///
    /// `from` must already be a key.
    pub(crate) fn discover(&mut self, state: KinematicState, from: KinematicState) -> bool {
        debug_assert!(self.prev.contains_key(&from));
        match self.prev.entry(state) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(Some(from));
                true
            }
        }
    }

    /// Whether `state` has been discovered.
    #[inline]
    pub fn contains(&self, state: &KinematicState) -> bool {
        self.prev.contains_key(state)
    }

    /// Predecessor of `state`: `None` if `state` is unknown, `Some(None)`
    /// for the start state.
    #[inline]
    pub fn get(&self, state: &KinematicState) -> Option<Option<KinematicState>> {
        self.prev.get(state).copied()
    }

    /// Number of discovered states.
    #[inline]
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Iterate over `(state, predecessor)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (KinematicState, Option<KinematicState>)> + '_ {
        self.prev.iter().map(|(&s, &p)| (s, p))
    }

    /// Walk predecessors from `terminal` back to the start and return the
    /// states in start-to-terminal order.
    ///
    /// Returns an empty path if `terminal` was never discovered.
    pub fn trace_back(&self, terminal: KinematicState) -> Vec<KinematicState> {
        let mut path = Vec::new();
        let mut cur = terminal;
        while let Some(prev) = self.get(&cur) {
            path.push(cur);
            match prev {
                Some(p) => cur = p,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
