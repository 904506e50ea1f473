//! Product repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the product collection.
//! - Hold the collection in insertion order for display.
//!
//! # Invariants
//! - Write paths call `Product::validate()` before mutating the collection.
//! - Insert rejects an identifier that is already present.
//! - Update replaces a record in place, so its position never changes.

use crate::model::product::{Product, ProductId, ProductValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for product collection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(ProductValidationError),
    NotFound(ProductId),
    DuplicateId(ProductId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "product not found: {id}"),
            Self::DuplicateId(id) => write!(f, "product id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ProductValidationError> for RepoError {
    fn from(value: ProductValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    fn insert_product(&mut self, product: &Product) -> RepoResult<ProductId>;
    fn update_product(&mut self, product: &Product) -> RepoResult<()>;
    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>>;
    fn list_products(&self) -> RepoResult<Vec<Product>>;
    /// Returns `false` when no record had this ID.
    fn delete_product(&mut self, id: ProductId) -> RepoResult<bool>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered product collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from existing records, keeping their order.
    ///
    /// Fails on the first invalid record or repeated ID.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for product in products {
            repo.insert_product(&product)?;
        }
        Ok(repo)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|product| product.id == id)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn insert_product(&mut self, product: &Product) -> RepoResult<ProductId> {
        product.validate()?;
        if self.position(product.id).is_some() {
            return Err(RepoError::DuplicateId(product.id));
        }

        self.products.push(product.clone());
        Ok(product.id)
    }

    fn update_product(&mut self, product: &Product) -> RepoResult<()> {
        product.validate()?;
        let index = self
            .position(product.id)
            .ok_or(RepoError::NotFound(product.id))?;

        self.products[index] = product.clone();
        Ok(())
    }

    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        Ok(self.position(id).map(|index| self.products[index].clone()))
    }

    fn list_products(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn delete_product(&mut self, id: ProductId) -> RepoResult<bool> {
        match self.position(id) {
            Some(index) => {
                self.products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryProductRepository, ProductRepository, RepoError};
    use crate::model::product::{Product, ProductDraft, ProductValidationError};

    fn product(name: &str) -> Product {
        Product::new(&ProductDraft::new(name, 10.0)).unwrap()
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut repo = InMemoryProductRepository::new();
        let item = product("Kettle");
        repo.insert_product(&item).unwrap();

        let err = repo.insert_product(&item).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(item.id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn insert_rejects_record_that_bypassed_constructor() {
        let mut repo = InMemoryProductRepository::new();
        let mut item = product("Kettle");
        item.price = 0.0;

        let err = repo.insert_product(&item).unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(ProductValidationError::InvalidPrice(0.0))
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn update_keeps_position() {
        let first = product("First");
        let mut second = product("Second");
        let third = product("Third");
        let mut repo =
            InMemoryProductRepository::from_products([first, second.clone(), third]).unwrap();

        second.name = "Second (edited)".to_string();
        repo.update_product(&second).unwrap();

        let names = repo
            .list_products()
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["First", "Second (edited)", "Third"]);
    }

    #[test]
    fn from_products_rejects_repeated_ids() {
        let item = product("Twice");
        let err = InMemoryProductRepository::from_products([item.clone(), item.clone()])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(item.id));
    }
}
