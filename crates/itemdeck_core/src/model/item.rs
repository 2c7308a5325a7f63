//! Item domain model.
//!
//! # Responsibility
//! - Define the catalog record rendered by the item list screen.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the process.
//! - Wire field names are exactly `id`, `name` and `description`.

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// One product entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item from its three fields.
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
