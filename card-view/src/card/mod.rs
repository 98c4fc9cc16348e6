//! Card handles.
//!
//! A card is the rendered unit for one item. The grid owns its cards and only
//! talks to them through [`CardHandle`]: it flips their `checked` flag and
//! opens or closes their context menu. Which item a card shows is recorded in
//! the grid's association table, not on the card.

mod events;

use std::sync::atomic::{AtomicUsize, Ordering};

pub use events::{CardEvent, CheckboxChange};

/// Unique identifier for a card instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(usize);

impl CardId {
    /// Allocate a fresh id.
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__card_{}", self.0)
    }
}

/// Pointer position a context menu was opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPosition {
    pub x: i32,
    pub y: i32,
}

/// Operations the grid needs from a card.
///
/// Implement this to back cards with a real presentation layer; [`Card`] is
/// the plain in-memory version.
pub trait CardHandle: std::fmt::Debug {
    /// Create a card for a newly rendered item.
    fn create(id: CardId) -> Self
    where
        Self: Sized;

    fn id(&self) -> CardId;

    /// Whether the card's checkbox is ticked.
    fn checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);

    /// Open the context menu at the given pointer coordinates.
    fn show_menu(&mut self, x: i32, y: i32);

    /// Close the context menu if open.
    fn hide_menu(&mut self);

    /// Where the context menu is open, if it is.
    fn menu(&self) -> Option<MenuPosition>;
}

/// In-memory card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    checked: bool,
    menu: Option<MenuPosition>,
}

impl Card {
    /// Check if the context menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }
}

impl CardHandle for Card {
    fn create(id: CardId) -> Self {
        Self {
            id,
            checked: false,
            menu: None,
        }
    }

    fn id(&self) -> CardId {
        self.id
    }

    fn checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn show_menu(&mut self, x: i32, y: i32) {
        self.menu = Some(MenuPosition { x, y });
    }

    fn hide_menu(&mut self) {
        self.menu = None;
    }

    fn menu(&self) -> Option<MenuPosition> {
        self.menu
    }
}
