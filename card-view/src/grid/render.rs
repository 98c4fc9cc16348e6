//! Card collection management.

use std::collections::{HashMap, HashSet};

use crate::card::{CardHandle, CardId};
use crate::codec;
use crate::item::CardItem;

use super::SelectionGrid;

/// A rendered card together with the item it shows.
#[derive(Debug)]
pub struct CardView<'a, T, C> {
    pub card: &'a C,
    pub item: &'a T,
}

impl<T: CardItem, C: CardHandle> CardView<'_, T, C> {
    pub fn checked(&self) -> bool {
        self.card.checked()
    }
}

impl<T: CardItem, C: CardHandle> SelectionGrid<T, C> {
    /// Rebuild the card collection from the current items and value.
    ///
    /// Cards are keyed by inode: an item that was already rendered keeps its
    /// card (and therefore its id and open menu). Each card's `checked` flag
    /// is set from the decoded value. The shift-click anchor is dropped if its
    /// card did not survive.
    pub fn render(&mut self) {
        let checked: HashSet<String> = codec::decode(self.value.as_deref()).into_iter().collect();

        let old_keys = std::mem::take(&mut self.keys);
        let old_cards = std::mem::take(&mut self.cards);
        let mut previous: HashMap<String, C> = old_keys.into_iter().zip(old_cards).collect();
        self.bindings.clear();

        let mut reused = 0;
        for (index, item) in self.items.iter().enumerate() {
            let mut card = match previous.remove(item.inode()) {
                Some(card) => {
                    reused += 1;
                    card
                }
                None => C::create(CardId::new()),
            };
            card.set_checked(checked.contains(item.inode()));
            self.bindings.insert(card.id(), index);
            self.keys.push(item.inode().to_string());
            self.cards.push(card);
        }

        if let Some(last) = self.last_checked
            && !self.bindings.contains_key(&last)
        {
            log::debug!("[{}] range anchor {} no longer rendered", self.config.name, last);
            self.last_checked = None;
        }

        log::debug!(
            "[{}] rendered {} cards ({} reused, {} dropped)",
            self.config.name,
            self.cards.len(),
            reused,
            previous.len()
        );
    }

    /// Rendered cards, in render order.
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Ids of the rendered cards, in render order.
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(CardHandle::id).collect()
    }

    pub fn card(&self, id: CardId) -> Option<&C> {
        self.bindings.get(&id).and_then(|&i| self.cards.get(i))
    }

    pub(super) fn card_mut(&mut self, id: CardId) -> Option<&mut C> {
        let index = *self.bindings.get(&id)?;
        self.cards.get_mut(index)
    }

    /// The card showing the item with this inode.
    pub fn card_for_inode(&self, inode: &str) -> Option<&C> {
        self.keys
            .iter()
            .position(|key| key == inode)
            .and_then(|i| self.cards.get(i))
    }

    /// The item a card is showing.
    pub fn item_for(&self, id: CardId) -> Option<&T> {
        self.bindings.get(&id).and_then(|&i| self.items.get(i))
    }

    /// Cards paired with their items, in render order.
    pub fn views(&self) -> impl Iterator<Item = CardView<'_, T, C>> {
        self.cards
            .iter()
            .zip(self.items.iter())
            .map(|(card, item)| CardView { card, item })
    }

    /// Close the context menu on every card.
    pub(super) fn close_menus(&mut self) {
        for card in &mut self.cards {
            card.hide_menu();
        }
    }
}
