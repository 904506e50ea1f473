//! Case-insensitive name substring filter.
//!
//! # Responsibility
//! - Select the products whose name contains a query.
//! - Describe a search outcome in the wording shown above the grid.
//!
//! # Invariants
//! - Result order is the input order; the filter never reorders.
//! - An empty query matches every product.

use crate::model::product::Product;

/// Returns whether `name` contains `query`, ignoring case.
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Keeps the products whose name contains `query`, in original order.
///
/// The query is used as given; callers decide whether to trim it.
pub fn filter_by_name(products: Vec<Product>, query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products;
    }

    products
        .into_iter()
        .filter(|product| name_matches(&product.name, query))
        .collect()
}

/// Summary line for an active search.
///
/// Returns `None` when `query` is empty, since no search is active.
pub fn search_summary(query: &str, hit_count: usize) -> Option<String> {
    if query.is_empty() {
        return None;
    }

    let message = match hit_count {
        0 => format!("No products found for \"{query}\""),
        1 => format!("Found 1 product for \"{query}\""),
        n => format!("Found {n} products for \"{query}\""),
    };
    Some(message)
}
