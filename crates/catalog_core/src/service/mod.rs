//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the add/update/delete/search use-cases.
//! - Keep UI/FFI layers decoupled from collection storage details.

pub mod product_service;
