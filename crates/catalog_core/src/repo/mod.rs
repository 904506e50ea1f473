//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the CRUD contract the service layer depends on.
//! - Keep collection storage details out of use-case orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Product::validate()` before mutation.
//! - Identifiers are unique within one repository.
//! - Listing preserves insertion order.

pub mod product_repo;
