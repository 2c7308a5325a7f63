//! Catalog filtering.
//!
//! # Responsibility
//! - Derive the displayed item subset from a catalog and a query.
//!
//! # Invariants
//! - Filtering is pure and total: every query text yields a result.
//! - Results preserve catalog order; nothing is re-ranked.

pub mod substring;

pub use substring::{filter_items, QueryMatcher};
