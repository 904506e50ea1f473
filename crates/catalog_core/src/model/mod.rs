//! Product catalog domain model.
//!
//! # Responsibility
//! - Define the canonical product record shared by every UI projection.
//! - Own input normalization (trimming) and validation rules.
//! - Convert raw form text into typed drafts.
//!
//! # Invariants
//! - Every stored product is identified by a non-nil `ProductId`.
//! - Stored names are trimmed and non-empty.
//! - Stored prices are finite and strictly positive.

pub mod form;
pub mod price;
pub mod product;
