//! Core domain logic for the product catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::form::ProductForm;
pub use model::price::{format_price_inr, parse_price};
pub use model::product::{
    Product, ProductDraft, ProductId, ProductValidationError, PLACEHOLDER_IMAGE,
};
pub use repo::product_repo::{InMemoryProductRepository, ProductRepository, RepoError, RepoResult};
pub use search::name_filter::{filter_by_name, name_matches, search_summary};
pub use seed::sample_products;
pub use service::product_service::{DeletePrompt, ProductService, ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
