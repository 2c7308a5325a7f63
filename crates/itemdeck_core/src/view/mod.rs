//! Screen navigation and item list view state.
//!
//! # Responsibility
//! - Model the two-screen flow (main screen and item list screen).
//! - Own the query text and displayed item set for the list screen.
//!
//! # Invariants
//! - Initial screen is [`Screen::Main`]; there is no terminal screen.
//! - List state exists only while the list screen is active.
//! - The displayed set is always a projection of the catalog.

pub mod labels;
pub mod state;

pub use state::{ItemListState, ItemRow, Screen, ViewAction, ViewError, ViewState};
