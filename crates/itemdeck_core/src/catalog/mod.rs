//! Catalog loading and in-memory catalog container.
//!
//! # Responsibility
//! - Turn a textual catalog source into an ordered, read-only `Catalog`.
//! - Keep data-source details behind [`CatalogSource`] so filter and view
//!   code never depend on where items come from.
//!
//! # Invariants
//! - Catalog order is source order; nothing in core re-sorts it.
//! - Item ids are assumed unique; duplicates are reported, not rejected.

use crate::model::item::{Item, ItemId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod loader;
pub mod source;

pub use loader::{init_shared_catalog, load_catalog, parse_catalog, shared_catalog};
pub use source::{CatalogSource, EmbeddedCatalogSource, FileCatalogSource, EMBEDDED_CATALOG_JSON};

/// Result type for catalog loading APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-layer error for source access and parsing.
#[derive(Debug)]
pub enum CatalogError {
    /// Source text could not be read.
    Io {
        source_label: String,
        source: std::io::Error,
    },
    /// Source text is not a well-formed item array.
    Parse {
        source_label: String,
        source: serde_json::Error,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io {
                source_label,
                source,
            } => write!(f, "failed to read catalog from {source_label}: {source}"),
            Self::Parse {
                source_label,
                source,
            } => write!(f, "malformed catalog in {source_label}: {source}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Ordered, immutable collection of all catalog items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wraps items in source order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first item carrying `id`, if any.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns ids that occur more than once, in ascending order.
    pub fn duplicate_ids(&self) -> Vec<ItemId> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                duplicates.insert(item.id);
            }
        }
        duplicates.into_iter().collect()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
