//! Content items displayed as cards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GridError;

/// Trait for records that can be displayed and selected in a grid.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct Asset {
///     inode: String,
///     identifier: String,
///     name: String,
/// }
///
/// impl CardItem for Asset {
///     fn inode(&self) -> &str {
///         &self.inode
///     }
///
///     fn identifier(&self) -> &str {
///         &self.identifier
///     }
/// }
/// ```
pub trait CardItem: Clone + std::fmt::Debug {
    /// Version-specific id. This is what the serialized value stores.
    fn inode(&self) -> &str;

    /// Entity id, stable across versions of the same content.
    fn identifier(&self) -> &str;
}

/// A content record as delivered by the host.
///
/// Anything besides `inode` and `identifier` is kept verbatim in `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contentlet {
    pub inode: String,
    pub identifier: String,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Contentlet {
    /// Create a contentlet with no extra fields.
    pub fn new(inode: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            inode: inode.into(),
            identifier: identifier.into(),
            data: Map::new(),
        }
    }

    /// Add an opaque field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Get an opaque field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The `title` field, if present and a string.
    pub fn title(&self) -> Option<&str> {
        self.data.get("title").and_then(Value::as_str)
    }
}

impl CardItem for Contentlet {
    fn inode(&self) -> &str {
        &self.inode
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Hosts send either bare contentlets or `{ "data": {...} }` card payloads.
///
/// `Wrapped` is tried first: a bare record whose opaque `data` field is itself
/// a full contentlet parses as that inner record.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Wrapped { data: Contentlet },
    Bare(Contentlet),
}

/// Parse a JSON array of items.
pub fn parse_items(json: &str) -> Result<Vec<Contentlet>, GridError> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Wrapped { data } => data,
            Entry::Bare(item) => item,
        })
        .collect())
}
