//! Grid configuration types.

/// Per-grid configuration.
///
/// Controls how a [`SelectionGrid`](crate::grid::SelectionGrid) validates its
/// candidate items and how it reports range gestures.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Display name used in log messages.
    pub name: &'static str,

    /// What to do when two candidate items share an identifier.
    pub duplicates: DuplicatePolicy,

    /// How `selected` events are emitted during a shift-click range.
    pub range_emit: RangeEmit,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            name: "card-view",
            duplicates: DuplicatePolicy::default(),
            range_emit: RangeEmit::default(),
        }
    }
}

impl GridConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Set the duplicate identifier policy.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Refuse item lists containing duplicate identifiers.
    pub fn reject_duplicates(mut self) -> Self {
        self.duplicates = DuplicatePolicy::Reject;
        self
    }

    /// Set the range emission mode.
    pub fn range_emit(mut self, mode: RangeEmit) -> Self {
        self.range_emit = mode;
        self
    }

    /// Emit a single `selected` event per range gesture.
    pub fn coalesce_range(mut self) -> Self {
        self.range_emit = RangeEmit::Coalesced;
        self
    }
}

/// Handling of candidate items that share an `identifier`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Accept the list; the first item carrying an identifier wins during
    /// reconciliation and toggling.
    #[default]
    FirstWins,

    /// Reject the whole list at `set_items`, leaving the previous items in place.
    Reject,
}

/// Emission of `selected` events for shift-click ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeEmit {
    /// Every card toggled by the range emits its own event.
    #[default]
    EachToggle,

    /// One event after the whole range has been applied.
    Coalesced,
}
