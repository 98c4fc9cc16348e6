//! Event handling for the selection grid.

use crate::card::{CardEvent, CardHandle, CardId, CheckboxChange};
use crate::config::RangeEmit;
use crate::item::CardItem;
use crate::range::range_span;

use super::SelectionGrid;

/// Result of handling a card event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored (unknown or unrendered card).
    Ignored,
    /// Event was consumed.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Event fired after every selection-affecting toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedEvent<T> {
    /// The full selection, in selection order.
    pub selection: Vec<T>,
    /// The selection serialized.
    pub value: String,
}

/// Event fired when a card body is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct CardClickEvent<T> {
    pub card: CardId,
    pub item: T,
}

/// Events the grid reports to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent<T> {
    Selected(SelectedEvent<T>),
    CardClick(CardClickEvent<T>),
}

impl<T: CardItem, C: CardHandle> SelectionGrid<T, C> {
    /// Dispatch an interaction raised by one of the cards.
    pub fn handle(&mut self, event: CardEvent) -> EventResult {
        let card = event.card();
        if !self.bindings.contains_key(&card) {
            log::warn!(
                "[{}] ignoring {:?} for unrendered card {}",
                self.config.name,
                event,
                card
            );
            return EventResult::Ignored;
        }

        match event {
            CardEvent::CheckboxChange(change) => self.on_checkbox_change(change),
            CardEvent::Activated { card } => {
                self.close_menus();
                if let Some(item) = self.item_for(card).cloned() {
                    self.events.push(GridEvent::CardClick(CardClickEvent { card, item }));
                }
            }
            CardEvent::ContextMenu { card, x, y } => {
                self.close_menus();
                if let Some(target) = self.card_mut(card) {
                    target.show_menu(x, y);
                }
            }
            CardEvent::ContextMenuClick { .. } => self.close_menus(),
        }
        EventResult::Consumed
    }

    /// Select or deselect the item shown by `card` and emit `selected`.
    ///
    /// Checking appends the item unless its identifier is already selected;
    /// unchecking removes every selected item with that identifier.
    /// Returns false if the card is not rendered.
    pub fn toggle(&mut self, card: CardId, checked: bool) -> bool {
        if !self.apply_toggle(card, checked) {
            return false;
        }
        self.emit_selected();
        true
    }

    fn on_checkbox_change(&mut self, change: CheckboxChange) {
        if let Some(card) = self.card_mut(change.card) {
            card.set_checked(change.checked);
        }

        // Only checking starts a range; shift-unchecking is a plain toggle.
        if change.shift_key && change.checked {
            self.range_select(change.card);
        } else {
            self.toggle(change.card, change.checked);
        }
        self.last_checked = Some(change.card);
    }

    fn range_select(&mut self, origin: CardId) {
        let span = range_span(&self.card_ids(), self.last_checked, origin);
        log::debug!(
            "[{}] range from {:?} to {}: {} cards",
            self.config.name,
            self.last_checked.map(|id| id.to_string()),
            origin,
            span.len()
        );

        match self.config.range_emit {
            RangeEmit::EachToggle => {
                for card in span {
                    self.toggle(card, true);
                }
            }
            RangeEmit::Coalesced => {
                for card in span {
                    self.apply_toggle(card, true);
                }
                self.emit_selected();
            }
        }
    }

    /// Patch the selection and value without emitting.
    fn apply_toggle(&mut self, card: CardId, checked: bool) -> bool {
        let Some(item) = self.item_for(card).cloned() else {
            log::warn!("[{}] toggle for unrendered card {}", self.config.name, card);
            return false;
        };
        if checked {
            if !self.selection.push(item.clone()) {
                log::trace!(
                    "[{}] {} already selected (identifier {})",
                    self.config.name,
                    item.inode(),
                    item.identifier()
                );
            }
        } else {
            self.selection.remove_identifier(item.identifier());
        }
        self.sync_checked(item.identifier());

        self.value = Some(self.selection.encode());
        self.dirty = true;
        log::trace!(
            "[{}] toggle {} -> {} (value {:?})",
            self.config.name,
            item.inode(),
            checked,
            self.value
        );
        true
    }

    /// Set `checked` on every card showing `identifier` from actual membership.
    ///
    /// With duplicate identifiers a toggle can leave the requested state
    /// unapplied (a sibling already holds the slot) or affect a sibling card.
    fn sync_checked(&mut self, identifier: &str) {
        for (item, card) in self.items.iter().zip(self.cards.iter_mut()) {
            if item.identifier() == identifier {
                card.set_checked(self.selection.contains_inode(item.inode()));
            }
        }
    }

    fn emit_selected(&mut self) {
        self.events.push(GridEvent::Selected(SelectedEvent {
            selection: self.selection.to_vec(),
            value: self.selection.encode(),
        }));
    }
}
