//! Core domain logic for ItemDeck.
//! This crate owns the catalog, the filter and the screen state; UI hosts
//! only render what it returns.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod view;

pub use catalog::{
    init_shared_catalog, load_catalog, parse_catalog, shared_catalog, Catalog, CatalogError,
    CatalogResult, CatalogSource, EmbeddedCatalogSource, FileCatalogSource,
};
pub use config::{ConfigError, CoreConfig};
pub use filter::{filter_items, QueryMatcher};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::item::{Item, ItemId};
pub use view::{ItemListState, ItemRow, Screen, ViewAction, ViewError, ViewState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
