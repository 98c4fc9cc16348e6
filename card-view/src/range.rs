//! Shift-click range selection.

use crate::card::CardId;

/// Compute the cards covered by a shift-click range.
///
/// Scans `cards` in render order and flips an in-range flag at each endpoint
/// (`origin` and `last_checked`), so it does not matter which endpoint comes
/// first. Both endpoints are included.
///
/// Without a usable anchor (nothing checked before, the anchor is the origin
/// itself, or the anchor is no longer rendered) the range is just `origin`.
/// An `origin` missing from `cards` also yields just `origin`, rather than
/// running from the anchor to the end of the list.
pub fn range_span(cards: &[CardId], last_checked: Option<CardId>, origin: CardId) -> Vec<CardId> {
    let anchor = match last_checked {
        Some(anchor) if anchor != origin && cards.contains(&anchor) => anchor,
        _ => return vec![origin],
    };
    if !cards.contains(&origin) {
        return vec![origin];
    }

    let mut span = Vec::new();
    let mut in_range = false;
    for &card in cards {
        if card == origin || card == anchor {
            in_range = !in_range;
            if !in_range {
                // closing endpoint
                span.push(card);
                break;
            }
        }
        if in_range {
            span.push(card);
        }
    }
    span
}
