//! Flutter-facing bindings for ItemDeck core.

pub mod api;
