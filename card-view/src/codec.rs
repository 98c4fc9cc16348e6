//! Serialized selection value.
//!
//! The external form of a selection is a single string of inodes joined by
//! commas. Absent, empty or non-string input means "no selection"; nothing
//! here can fail.

use serde_json::Value;

use crate::item::CardItem;

/// Separator between inodes in a serialized value.
pub const SEPARATOR: char = ',';

/// Split a serialized value into its inodes.
///
/// Empty segments are dropped, so `""`, `","` and `None` all decode to `[]`.
pub fn decode(serialized: Option<&str>) -> Vec<String> {
    match serialized {
        Some(s) => s
            .split(SEPARATOR)
            .filter(|inode| !inode.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Decode a host-supplied JSON value. Anything but a string is treated as absent.
pub fn decode_json(value: &Value) -> Vec<String> {
    decode(value.as_str())
}

/// Join the inodes of `items`, in order.
pub fn encode<T: CardItem>(items: &[T]) -> String {
    items
        .iter()
        .map(CardItem::inode)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}
