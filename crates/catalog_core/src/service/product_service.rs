//! Product catalog use-case service.
//!
//! # Responsibility
//! - Provide add/update/delete/search entry points for UI callers.
//! - Accept raw dialog input as well as typed drafts.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Rejected operations leave the collection unchanged.
//! - Update of an unknown ID reports `ProductNotFound`; delete of an
//!   unknown ID is a no-op.
//! - Log lines carry IDs and counts only, never names or descriptions.

use crate::model::form::ProductForm;
use crate::model::product::{Product, ProductDraft, ProductId, ProductValidationError};
use crate::repo::product_repo::{InMemoryProductRepository, ProductRepository, RepoError};
use crate::search::name_filter::{filter_by_name, search_summary};
use crate::seed::sample_products;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for catalog use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Input failed name/price rules.
    Validation(ProductValidationError),
    /// Target product does not exist.
    ProductNotFound(ProductId),
    /// Collection-level failure other than not-found.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ProductNotFound(id) => write!(f, "product not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent catalog state: {details}")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProductValidationError> for ServiceError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::ProductNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Confirmation shown before a product is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub product_id: ProductId,
    pub product_name: String,
}

impl DeletePrompt {
    pub fn message(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            self.product_name
        )
    }
}

/// Catalog facade over a product repository.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl ProductService<InMemoryProductRepository> {
    /// Creates an in-memory catalog holding the demo products.
    pub fn with_samples() -> ServiceResult<Self> {
        let repo = InMemoryProductRepository::from_products(sample_products())?;
        info!(
            "event=catalog_seed module=service status=ok count={}",
            repo.len()
        );
        Ok(Self::new(repo))
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a product under a newly generated ID and appends it.
    ///
    /// # Errors
    /// - `Validation` when the name is blank or the price is not positive.
    pub fn add_product(&mut self, draft: &ProductDraft) -> ServiceResult<Product> {
        let product = Product::new(draft).inspect_err(|err| log_rejected("product_add", err))?;
        let id = self.repo.insert_product(&product)?;
        info!(
            "event=product_add module=service status=ok product_id={id} count={}",
            self.repo.len()
        );
        Ok(product)
    }

    /// Adds a product from raw add-dialog text.
    pub fn add_from_form(&mut self, form: &ProductForm) -> ServiceResult<Product> {
        let draft = form
            .parse()
            .inspect_err(|err| log_rejected("product_add", err))?;
        self.add_product(&draft)
    }

    /// Replaces every editable field of the record with the same ID.
    ///
    /// The stored record keeps its position in the collection. Input is
    /// normalized the same way as on add.
    ///
    /// # Errors
    /// - `Validation` when the name is blank or the price is not positive.
    /// - `ProductNotFound` when no record has this ID.
    pub fn update_product(&mut self, product: &Product) -> ServiceResult<Product> {
        let normalized = Product::with_id(product.id, &product.to_draft())
            .inspect_err(|err| log_rejected("product_update", err))?;

        if let Err(err) = self.repo.update_product(&normalized) {
            warn!(
                "event=product_update module=service status=error product_id={} error={err}",
                normalized.id
            );
            return Err(err.into());
        }
        info!(
            "event=product_update module=service status=ok product_id={}",
            normalized.id
        );

        self.repo
            .get_product(normalized.id)?
            .ok_or(ServiceError::InconsistentState(
                "updated product not found in read-back",
            ))
    }

    /// Updates a product from raw edit-dialog text, keeping its ID.
    pub fn update_from_form(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> ServiceResult<Product> {
        let draft = form
            .parse()
            .inspect_err(|err| log_rejected("product_update", err))?;
        let product = Product::with_id(id, &draft)?;
        self.update_product(&product)
    }

    /// Removes the product with this ID.
    ///
    /// Returns `false` and changes nothing when the ID is unknown.
    pub fn delete_product(&mut self, id: ProductId) -> ServiceResult<bool> {
        let removed = self.repo.delete_product(id)?;
        if removed {
            info!(
                "event=product_delete module=service status=ok product_id={id} count={}",
                self.repo.len()
            );
        } else {
            debug!("event=product_delete module=service status=noop product_id={id}");
        }
        Ok(removed)
    }

    /// Gets one product by ID.
    pub fn get_product(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        Ok(self.repo.get_product(id)?)
    }

    /// Lists every product in insertion order.
    pub fn list_products(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.repo.list_products()?)
    }

    /// Products whose name contains the trimmed query, ignoring case.
    ///
    /// A blank query returns the full collection in original order.
    pub fn search(&self, query: &str) -> ServiceResult<Vec<Product>> {
        let products = self.repo.list_products()?;
        Ok(filter_by_name(products, query.trim()))
    }

    /// Summary line for the current search, `None` when the query is blank.
    pub fn search_summary(&self, query: &str) -> ServiceResult<Option<String>> {
        let query = query.trim();
        let hits = self.search(query)?;
        Ok(search_summary(query, hits.len()))
    }

    /// Builds the delete confirmation for a product.
    ///
    /// Returns `None` when the ID is unknown, so no dialog should open.
    pub fn delete_prompt(&self, id: ProductId) -> ServiceResult<Option<DeletePrompt>> {
        let prompt = self.repo.get_product(id)?.map(|product| DeletePrompt {
            product_id: product.id,
            product_name: product.name,
        });
        Ok(prompt)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn log_rejected(event: &str, err: &ProductValidationError) {
    warn!(
        "event={event} module=service status=rejected reason={}",
        rejection_reason(err)
    );
}

fn rejection_reason(err: &ProductValidationError) -> &'static str {
    match err {
        ProductValidationError::NilId => "nil_id",
        ProductValidationError::EmptyName => "empty_name",
        ProductValidationError::InvalidPrice(_) => "invalid_price",
        ProductValidationError::UnparsablePrice(_) => "unparsable_price",
    }
}

#[cfg(test)]
mod tests {
    use super::{DeletePrompt, ServiceError};
    use crate::model::product::ProductValidationError;
    use crate::repo::product_repo::RepoError;
    use uuid::Uuid;

    #[test]
    fn repo_not_found_maps_to_product_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(
            ServiceError::from(RepoError::NotFound(id)),
            ServiceError::ProductNotFound(id)
        );
        assert_eq!(
            ServiceError::from(RepoError::Validation(ProductValidationError::EmptyName)),
            ServiceError::Validation(ProductValidationError::EmptyName)
        );
    }

    #[test]
    fn delete_prompt_message_names_product() {
        let prompt = DeletePrompt {
            product_id: Uuid::new_v4(),
            product_name: "Digital Camera".to_string(),
        };
        assert_eq!(
            prompt.message(),
            "Are you sure you want to delete Digital Camera? This action cannot be undone."
        );
    }
}
