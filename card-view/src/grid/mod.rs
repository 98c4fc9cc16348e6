//! Selectable card grid.
//!
//! `SelectionGrid` reconciles three inputs into one selection:
//! - the candidate items supplied by the host,
//! - the serialized value supplied by the host,
//! - checkbox, click and context-menu events from its cards.
//!
//! Host writes (`set_items`, `set_value`) always re-derive the selection from
//! scratch and, once mounted, re-render the cards in the same call. User
//! toggles patch the selection in place and rewrite the value without
//! re-deriving it, so the selection keeps the order the user picked items in.

mod events;
mod render;

use std::collections::HashMap;

use serde_json::Value;

use crate::card::{Card, CardHandle, CardId};
use crate::config::{DuplicatePolicy, GridConfig};
use crate::error::GridError;
use crate::item::CardItem;
use crate::selection::{SelectionSet, find_duplicate, reconcile};

pub use events::{CardClickEvent, EventResult, GridEvent, SelectedEvent};
pub use render::CardView;

/// A grid of selectable cards.
///
/// # Example
///
/// ```ignore
/// let mut grid: SelectionGrid<Contentlet> = SelectionGrid::new(GridConfig::new("assets"));
/// grid.set_items(items)?;
/// grid.set_value(Some("inode-1,inode-3"));
/// grid.mount();
///
/// let first = grid.cards()[0].id();
/// grid.handle(CardEvent::check(first, true));
/// for event in grid.drain_events() {
///     // forward to the host
/// }
/// ```
#[derive(Debug)]
pub struct SelectionGrid<T: CardItem, C: CardHandle = Card> {
    config: GridConfig,
    /// Candidate items, in render order.
    items: Vec<T>,
    /// Serialized selection as last written by the host or a toggle.
    value: Option<String>,
    selection: SelectionSet<T>,
    /// Rendered cards, parallel to `items` once mounted.
    cards: Vec<C>,
    /// Inode each card was rendered for, parallel to `cards`.
    keys: Vec<String>,
    /// Association table: card -> index into `items` and `cards`.
    bindings: HashMap<CardId, usize>,
    /// Anchor of the next shift-click range.
    last_checked: Option<CardId>,
    /// Events waiting to be drained by the host.
    events: Vec<GridEvent<T>>,
    mounted: bool,
    dirty: bool,
}

impl<T: CardItem, C: CardHandle> Default for SelectionGrid<T, C> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<T: CardItem, C: CardHandle> SelectionGrid<T, C> {
    /// Create an empty, unmounted grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            value: None,
            selection: SelectionSet::new(),
            cards: Vec::new(),
            keys: Vec::new(),
            bindings: HashMap::new(),
            last_checked: None,
            events: Vec::new(),
            mounted: false,
            dirty: false,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Host inputs
    // -------------------------------------------------------------------------

    /// Replace the candidate items.
    ///
    /// Fails only under [`DuplicatePolicy::Reject`], in which case the
    /// previous items stay in place.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), GridError> {
        if self.config.duplicates == DuplicatePolicy::Reject
            && let Some((identifier, first, second)) = find_duplicate(&items)
        {
            log::warn!(
                "[{}] rejecting items: identifier {} used by {} and {}",
                self.config.name,
                identifier,
                first,
                second
            );
            return Err(GridError::DuplicateIdentifier {
                identifier,
                first,
                second,
            });
        }

        self.items = items;
        self.refresh("items");
        Ok(())
    }

    /// Replace the serialized value. `None` means no selection.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.value = value.map(str::to_string);
        self.refresh("value");
    }

    /// Replace the serialized value from JSON. Non-string values mean no selection.
    pub fn set_value_json(&mut self, value: &Value) {
        self.set_value(value.as_str());
    }

    /// Re-derive the selection after a host write.
    fn refresh(&mut self, trigger: &str) {
        self.selection = reconcile(&self.items, self.value.as_deref());
        log::debug!(
            "[{}] {} changed: {} selected",
            self.config.name,
            trigger,
            self.selection.len()
        );
        if self.mounted {
            self.render();
        }
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Perform the initial reconcile and render.
    pub fn mount(&mut self) {
        self.selection = reconcile(&self.items, self.value.as_deref());
        self.mounted = true;
        self.render();
        self.dirty = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The raw value as last written.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn selection(&self) -> &SelectionSet<T> {
        &self.selection
    }

    /// The current selection, serialized.
    pub fn get_value(&self) -> String {
        self.selection.encode()
    }

    /// The anchor for the next shift-click range.
    pub fn last_checked(&self) -> Option<CardId> {
        self.last_checked
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Reset the selection and uncheck every card.
    ///
    /// Meant for host-driven form resets: no `selected` event is emitted.
    pub fn clear_value(&mut self) {
        self.value = Some(String::new());
        self.selection.clear();
        for card in &mut self.cards {
            card.set_checked(false);
        }
        log::debug!("[{}] cleared", self.config.name);
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Events & dirty tracking
    // -------------------------------------------------------------------------

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GridEvent<T>> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events.
    pub fn pending_events(&self) -> &[GridEvent<T>] {
        &self.events
    }

    /// Check if the grid has changed since the last `clear_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
