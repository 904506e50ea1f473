//! Flutter-facing bindings for the product catalog core.

pub mod api;
