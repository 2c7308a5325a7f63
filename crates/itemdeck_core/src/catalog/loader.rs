//! Catalog parsing and process-wide load-once cache.
//!
//! # Invariants
//! - Parsing is pure; only [`load_catalog`] emits diagnostics.
//! - The shared catalog is loaded at most once per process and never replaced.

use super::source::{CatalogSource, EmbeddedCatalogSource};
use super::{Catalog, CatalogError, CatalogResult};
use crate::model::item::Item;
use log::{error, info, warn};
use once_cell::sync::OnceCell;

static SHARED_CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Parses catalog text (a JSON array of `{id, name, description}` objects).
///
/// # Errors
/// - Returns [`CatalogError::Parse`] when the text is not a well-formed item
///   array.
pub fn parse_catalog(text: &str) -> CatalogResult<Catalog> {
    parse_labeled(text, "catalog text")
}

/// Reads and parses one catalog from `source`.
///
/// Duplicate ids are logged as a warning; they do not fail the load.
pub fn load_catalog(source: &dyn CatalogSource) -> CatalogResult<Catalog> {
    let label = source.describe();
    let result = source
        .read()
        .and_then(|text| parse_labeled(&text, label.as_str()));

    match &result {
        Ok(catalog) => {
            info!(
                "event=catalog_load module=catalog status=ok source={} items={}",
                label,
                catalog.len()
            );
            let duplicates = catalog.duplicate_ids();
            if !duplicates.is_empty() {
                warn!(
                    "event=catalog_duplicate_ids module=catalog status=warn source={} ids={:?}",
                    label, duplicates
                );
            }
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error source={} error={}",
                label, err
            );
        }
    }

    result
}

/// Loads the process-wide catalog from `source` on first call.
///
/// Later calls return the already loaded catalog and ignore `source`.
pub fn init_shared_catalog(source: &dyn CatalogSource) -> CatalogResult<&'static Catalog> {
    SHARED_CATALOG.get_or_try_init(|| load_catalog(source))
}

/// Returns the process-wide catalog, loading the embedded one if needed.
pub fn shared_catalog() -> CatalogResult<&'static Catalog> {
    init_shared_catalog(&EmbeddedCatalogSource)
}

fn parse_labeled(text: &str, label: &str) -> CatalogResult<Catalog> {
    serde_json::from_str::<Vec<Item>>(text)
        .map(Catalog::new)
        .map_err(|source| CatalogError::Parse {
            source_label: label.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_catalog, shared_catalog};
    use crate::catalog::CatalogError;

    #[test]
    fn parse_accepts_empty_array() {
        assert!(parse_catalog("[]").expect("empty array should parse").is_empty());
    }

    #[test]
    fn parse_rejects_wrong_field_type() {
        let err = parse_catalog(r#"[{"id": "one", "name": "a", "description": "b"}]"#)
            .expect_err("string id must be rejected");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn parse_rejects_object_root() {
        let err = parse_catalog(r#"{"id": 1, "name": "a", "description": "b"}"#)
            .expect_err("object root must be rejected");
        assert!(err.to_string().starts_with("malformed catalog in catalog text"));
    }

    #[test]
    fn shared_catalog_is_loaded_once() {
        let first = shared_catalog().expect("embedded catalog should load");
        let second = shared_catalog().expect("embedded catalog should load");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 20);
    }
}
