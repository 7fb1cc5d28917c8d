/// Velocity bound used when none is configured.
pub const DEFAULT_VMAX: i32 = 10;

/// Parameters of a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Largest magnitude allowed for either velocity component.
    pub vmax: i32,
    /// Stop with [`SearchStatus::Aborted`](crate::SearchStatus::Aborted)
    /// once this many states have been expanded. `None` means no limit.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_VMAX)
    }
}

impl SearchConfig {
    /// Unbounded search with the given velocity bound.
    pub const fn new(vmax: i32) -> Self {
        Self {
            vmax,
            max_expansions: None,
        }
    }

    /// Set the expansion budget (builder).
    pub const fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}
