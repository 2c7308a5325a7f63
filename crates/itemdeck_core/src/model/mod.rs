//! Catalog domain model.
//!
//! # Responsibility
//! - Define the record shape shared by loader, filter and view layers.
//!
//! # Invariants
//! - Items are immutable once loaded; views only project them.

pub mod item;
