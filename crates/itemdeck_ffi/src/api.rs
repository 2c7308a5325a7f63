//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog listing and filtering to Dart via FRB.
//! - Hand the UI ready-to-render rows, labels and messages.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported inside response envelopes, never thrown.

use itemdeck_core::config::{catalog_path_from_env, catalog_source_for};
use itemdeck_core::view::labels;
use itemdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, init_shared_catalog,
    ping as ping_inner, Catalog, CatalogResult, Item, ItemListState,
};
use log::error;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One catalog row as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItemView {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Response envelope for catalog list and filter calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListResponse {
    /// Displayed items in catalog order.
    pub items: Vec<CatalogItemView>,
    /// Human-readable diagnostics message.
    pub message: String,
    /// Message to show instead of the list when a non-blank query has no hits.
    pub empty_state: Option<String>,
    /// Catalog size before filtering.
    pub total: u32,
}

/// Literal strings for both screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
    pub open_item_list: String,
    pub item_list_title: String,
    pub filter_input: String,
    pub filter_action: String,
    pub back_to_main: String,
    pub row_id_prefix: String,
    pub row_name_prefix: String,
    pub row_description_prefix: String,
}

/// Returns the full catalog for the initial list screen.
///
/// # FFI contract
/// - First call loads the catalog (embedded, or `ITEMDECK_CATALOG_PATH`).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_items() -> CatalogListResponse {
    catalog_filter(String::new())
}

/// Filters the catalog by case-insensitive substring on name or description.
///
/// # FFI contract
/// - Blank `query` returns every item.
/// - Never panics; load failures come back as an empty envelope with message.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_filter(query: String) -> CatalogListResponse {
    let catalog = match resolve_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("event=catalog_filter module=ffi status=error error={err}");
            return CatalogListResponse {
                items: Vec::new(),
                message: format!("catalog_filter failed: {err}"),
                empty_state: None,
                total: 0,
            };
        }
    };

    let mut list = ItemListState::new(catalog);
    list.set_query(query);
    let items = list
        .apply_filter()
        .iter()
        .map(to_item_view)
        .collect::<Vec<_>>();
    let empty_state = list.empty_state_message();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} item(s).", items.len())
    };

    CatalogListResponse {
        items,
        message,
        empty_state,
        total: u32::try_from(catalog.len()).unwrap_or(u32::MAX),
    }
}

/// Returns literal screen labels.
#[flutter_rust_bridge::frb(sync)]
pub fn ui_labels() -> UiLabels {
    UiLabels {
        open_item_list: labels::OPEN_ITEM_LIST.to_string(),
        item_list_title: labels::ITEM_LIST_TITLE.to_string(),
        filter_input: labels::FILTER_INPUT.to_string(),
        filter_action: labels::FILTER_ACTION.to_string(),
        back_to_main: labels::BACK_TO_MAIN.to_string(),
        row_id_prefix: labels::ROW_ID_PREFIX.to_string(),
        row_name_prefix: labels::ROW_NAME_PREFIX.to_string(),
        row_description_prefix: labels::ROW_DESCRIPTION_PREFIX.to_string(),
    }
}

// Only the catalog variable matters here; logging is configured by `init_logging`.
fn resolve_catalog() -> CatalogResult<&'static Catalog> {
    let path = catalog_path_from_env();
    init_shared_catalog(catalog_source_for(path.as_deref()).as_ref())
}

fn to_item_view(item: &Item) -> CatalogItemView {
    CatalogItemView {
        id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
    }
}
