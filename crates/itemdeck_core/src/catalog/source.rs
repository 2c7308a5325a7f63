//! Catalog text sources.
//!
//! # Responsibility
//! - Provide the raw catalog text for the loader.
//! - Keep the built-in fixture and on-disk overrides interchangeable.

use super::{CatalogError, CatalogResult};
use std::path::{Path, PathBuf};

/// Built-in catalog shipped inside the binary.
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Supplier of raw catalog text.
pub trait CatalogSource {
    /// Human-readable label used in diagnostics and error messages.
    fn describe(&self) -> String;

    /// Returns the full catalog text.
    fn read(&self) -> CatalogResult<String>;
}

/// Source backed by [`EMBEDDED_CATALOG_JSON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

impl CatalogSource for EmbeddedCatalogSource {
    fn describe(&self) -> String {
        "embedded catalog".to_string()
    }

    fn read(&self) -> CatalogResult<String> {
        Ok(EMBEDDED_CATALOG_JSON.to_string())
    }
}

/// Source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        format!("`{}`", self.path.display())
    }

    fn read(&self) -> CatalogResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            source_label: self.describe(),
            source,
        })
    }
}
