pub mod card;
pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod item;
pub mod range;
pub mod selection;

pub mod prelude {
    pub use crate::card::{Card, CardEvent, CardHandle, CardId, CheckboxChange, MenuPosition};
    pub use crate::codec::{decode, decode_json, encode};
    pub use crate::config::{DuplicatePolicy, GridConfig, RangeEmit};
    pub use crate::error::GridError;
    pub use crate::grid::{
        CardClickEvent, CardView, EventResult, GridEvent, SelectedEvent, SelectionGrid,
    };
    pub use crate::item::{CardItem, Contentlet, parse_items};
    pub use crate::selection::{SelectionSet, reconcile};
}
