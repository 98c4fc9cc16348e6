//! Interaction events raised by cards.

use super::CardId;

/// A card's checkbox changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChange {
    /// The card whose checkbox changed.
    pub card: CardId,
    /// Whether shift was held during the interaction.
    pub shift_key: bool,
    /// The checkbox state after the change.
    pub checked: bool,
}

/// Events a card delivers to its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// The checkbox was toggled.
    CheckboxChange(CheckboxChange),
    /// The card body (not its checkbox) was clicked.
    Activated { card: CardId },
    /// A context menu was requested at pointer coordinates.
    ContextMenu { card: CardId, x: i32, y: i32 },
    /// An entry of the card's context menu was picked.
    ContextMenuClick { card: CardId },
}

impl CardEvent {
    /// Checkbox change without modifiers.
    pub fn check(card: CardId, checked: bool) -> Self {
        Self::CheckboxChange(CheckboxChange {
            card,
            shift_key: false,
            checked,
        })
    }

    /// Checkbox change with shift held.
    pub fn shift_check(card: CardId, checked: bool) -> Self {
        Self::CheckboxChange(CheckboxChange {
            card,
            shift_key: true,
            checked,
        })
    }

    /// The card that raised this event.
    pub fn card(&self) -> CardId {
        match self {
            Self::CheckboxChange(change) => change.card,
            Self::Activated { card }
            | Self::ContextMenu { card, .. }
            | Self::ContextMenuClick { card } => *card,
        }
    }
}
