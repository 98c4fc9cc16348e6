//! Error types for the selection grid.
//!
//! Interaction never fails: unknown cards, stale values and malformed
//! serialized selections all degrade to a valid (possibly empty) selection.
//! Errors only surface at input validation boundaries.

use thiserror::Error;

/// Errors raised while accepting host input.
#[derive(Debug, Error)]
pub enum GridError {
    /// Two candidate items share an identifier and the grid is configured
    /// with [`DuplicatePolicy::Reject`](crate::config::DuplicatePolicy::Reject).
    #[error("Duplicate identifier '{identifier}' (inodes '{first}' and '{second}')")]
    DuplicateIdentifier {
        /// The shared identifier.
        identifier: String,
        /// Inode of the first item carrying the identifier.
        first: String,
        /// Inode of the colliding item.
        second: String,
    },

    /// The items payload could not be parsed.
    #[error("Invalid items payload: {0}")]
    InvalidItems(#[from] serde_json::Error),
}
