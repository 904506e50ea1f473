//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalog functions to Dart via FRB.
//! - Own the single process-wide product catalog.
//! - Keep error semantics simple: envelopes with `ok` and a message.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Product IDs cross the boundary as hyphenated UUID strings.
//! - Prices arrive as the raw text typed into the dialog.

use catalog_core::{
    core_version as core_version_inner, format_price_inr, init_logging as init_logging_inner,
    ping as ping_inner, search_summary, InMemoryProductRepository, Product, ProductForm,
    ProductId, ProductService,
};
use log::{error, warn};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

type Catalog = ProductService<InMemoryProductRepository>;

const SEED_ENV_VAR: &str = "CATALOG_SEED_SAMPLES";
static CATALOG: OnceLock<Mutex<Catalog>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One product as rendered by a catalog card.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProductItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Whole-rupee display text, e.g. `₹15,999`.
    pub price_label: String,
    /// Image URL or the placeholder path.
    pub image_src: String,
}

impl From<Product> for CatalogProductItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price_label: format_price_inr(product.price),
            image_src: product.image_src().to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

/// Edit-dialog field text prefilled from a stored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEditForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    /// Empty when the product has no image.
    pub image_url: String,
}

/// Search response for the product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSearchResponse {
    /// Matching products in display order.
    pub items: Vec<CatalogProductItem>,
    /// Summary line for an active search; `None` when the query is blank.
    pub summary: Option<String>,
}

/// Generic action response envelope for add/update/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected product ID.
    pub product_id: Option<String>,
    /// Toast text for the UI.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>, product_id: ProductId) -> Self {
        Self {
            ok: true,
            product_id: Some(product_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            product_id: None,
            message: message.into(),
        }
    }
}

/// Replaces the catalog with an empty or demo-seeded one.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_reset(seed_samples: bool) {
    let fresh = new_catalog(seed_samples);
    *lock_catalog() = fresh;
}

/// Adds a product from add-dialog text.
///
/// # FFI contract
/// - Never panics.
/// - Returns the new product ID on success and the dialog error text on
///   validation failure.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_add(
    name: String,
    description: String,
    price: String,
    image_url: String,
) -> CatalogActionResponse {
    let form = ProductForm {
        name,
        description,
        price,
        image_url,
    };
    match lock_catalog().add_from_form(&form) {
        Ok(product) => CatalogActionResponse::success("Product added successfully!", product.id),
        Err(err) => CatalogActionResponse::failure(err.to_string()),
    }
}

/// Updates a product from edit-dialog text, keeping its ID.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_update(
    id: String,
    name: String,
    description: String,
    price: String,
    image_url: String,
) -> CatalogActionResponse {
    let Some(product_id) = parse_product_id(&id) else {
        return CatalogActionResponse::failure(format!("invalid product id: `{id}`"));
    };
    let form = ProductForm {
        name,
        description,
        price,
        image_url,
    };
    match lock_catalog().update_from_form(product_id, &form) {
        Ok(product) => {
            CatalogActionResponse::success("Product updated successfully!", product.id)
        }
        Err(err) => CatalogActionResponse::failure(err.to_string()),
    }
}

/// Deletes a product. Unknown IDs succeed without changing anything.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_delete(id: String) -> CatalogActionResponse {
    let Some(product_id) = parse_product_id(&id) else {
        return CatalogActionResponse::failure(format!("invalid product id: `{id}`"));
    };
    match lock_catalog().delete_product(product_id) {
        Ok(_) => CatalogActionResponse::success("Product deleted successfully!", product_id),
        Err(err) => CatalogActionResponse::failure(err.to_string()),
    }
}

/// Prefills the edit dialog, `None` when the ID is unknown or malformed.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_edit_form(id: String) -> Option<CatalogEditForm> {
    let product_id = parse_product_id(&id)?;
    let product = match lock_catalog().get_product(product_id) {
        Ok(product) => product?,
        Err(err) => {
            warn!("event=ffi_edit_form module=ffi status=error error={err}");
            return None;
        }
    };
    let form = ProductForm::from_product(&product);
    Some(CatalogEditForm {
        id: product.id.to_string(),
        name: form.name,
        description: form.description,
        price: form.price,
        image_url: form.image_url,
    })
}

/// Confirmation text for the delete dialog, `None` when the ID is unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_delete_prompt(id: String) -> Option<String> {
    let product_id = parse_product_id(&id)?;
    match lock_catalog().delete_prompt(product_id) {
        Ok(prompt) => prompt.map(|prompt| prompt.message()),
        Err(err) => {
            warn!("event=ffi_delete_prompt module=ffi status=error error={err}");
            None
        }
    }
}

/// Filters the catalog by case-insensitive name substring.
///
/// # FFI contract
/// - Blank query returns the full catalog with no summary.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_search(query: String) -> CatalogSearchResponse {
    match lock_catalog().search(&query) {
        Ok(hits) => CatalogSearchResponse {
            summary: search_summary(query.trim(), hits.len()),
            items: hits.into_iter().map(CatalogProductItem::from).collect(),
        },
        Err(err) => {
            warn!("event=ffi_search module=ffi status=error error={err}");
            CatalogSearchResponse {
                items: Vec::new(),
                summary: Some(err.to_string()),
            }
        }
    }
}

fn lock_catalog() -> MutexGuard<'static, Catalog> {
    CATALOG
        .get_or_init(|| {
            let raw = std::env::var(SEED_ENV_VAR).ok();
            Mutex::new(new_catalog(seed_enabled(raw.as_deref())))
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn new_catalog(seed_samples: bool) -> Catalog {
    if !seed_samples {
        return ProductService::new(InMemoryProductRepository::new());
    }
    ProductService::with_samples().unwrap_or_else(|err| {
        error!("event=catalog_seed module=ffi status=error error={err}");
        ProductService::new(InMemoryProductRepository::new())
    })
}

/// Seeding stays on unless the variable is `0` or `false`.
fn seed_enabled(raw: Option<&str>) -> bool {
    match raw {
        Some(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false"),
        None => true,
    }
}

fn parse_product_id(raw: &str) -> Option<ProductId> {
    Uuid::parse_str(raw.trim()).ok().filter(|id| !id.is_nil())
}
