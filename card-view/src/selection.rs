//! Selection state.
//!
//! A [`SelectionSet`] is ordered by the time items were selected and never
//! holds two items with the same identifier. It is either derived wholesale
//! from the candidate items and the serialized value ([`reconcile`]) or
//! patched one item at a time by user toggles.

use std::collections::HashSet;

use crate::codec;
use crate::item::CardItem;

/// Ordered, identifier-unique set of selected items.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CardItem> SelectionSet<T> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Check if an item with this identifier is selected.
    pub fn contains_identifier(&self, identifier: &str) -> bool {
        self.items.iter().any(|item| item.identifier() == identifier)
    }

    /// Check if an item with this inode is selected.
    pub fn contains_inode(&self, inode: &str) -> bool {
        self.items.iter().any(|item| item.inode() == inode)
    }

    /// Append an item unless its identifier is already selected.
    /// Returns true if the item was added.
    pub fn push(&mut self, item: T) -> bool {
        if self.contains_identifier(item.identifier()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove every item with this identifier.
    /// Returns the number of items removed.
    pub fn remove_identifier(&mut self, identifier: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.identifier() != identifier);
        before - self.items.len()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The serialized form of this selection.
    pub fn encode(&self) -> String {
        codec::encode(&self.items)
    }
}

impl<'a, T> IntoIterator for &'a SelectionSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Derive the selection from the candidate items and a serialized value.
///
/// Keeps the items whose inode appears in `serialized`, in the order of
/// `items`. Inodes with no matching item are dropped. When several items share
/// an identifier, the first one wins.
pub fn reconcile<T: CardItem>(items: &[T], serialized: Option<&str>) -> SelectionSet<T> {
    let targets: HashSet<String> = codec::decode(serialized).into_iter().collect();
    let mut selection = SelectionSet::new();
    if targets.is_empty() {
        return selection;
    }

    for item in items.iter().filter(|item| targets.contains(item.inode())) {
        if !selection.push(item.clone()) {
            log::debug!(
                "[reconcile] skipping inode {} (identifier {} already selected)",
                item.inode(),
                item.identifier()
            );
        }
    }

    log::debug!(
        "[reconcile] {} of {} items selected ({} requested)",
        selection.len(),
        items.len(),
        targets.len()
    );
    selection
}

/// Find the first pair of items sharing an identifier.
///
/// Returns `(identifier, first_inode, second_inode)`.
pub fn find_duplicate<T: CardItem>(items: &[T]) -> Option<(String, String, String)> {
    for (i, item) in items.iter().enumerate() {
        if let Some(other) = items[i + 1..]
            .iter()
            .find(|other| other.identifier() == item.identifier())
        {
            return Some((
                item.identifier().to_string(),
                item.inode().to_string(),
                other.inode().to_string(),
            ));
        }
    }
    None
}
