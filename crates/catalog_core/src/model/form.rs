//! Raw add/edit form input.
//!
//! # Responsibility
//! - Hold dialog field text exactly as typed.
//! - Convert it into a validated `ProductDraft`.
//!
//! # Invariants
//! - Name is checked before price, so a form with both problems reports
//!   the missing name.

use crate::model::price::parse_price;
use crate::model::product::{Product, ProductDraft, ProductValidationError};

/// Text fields of the add/edit product dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl ProductForm {
    /// Prefills the edit dialog from an existing record.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Parses and trims every field into a draft.
    pub fn parse(&self) -> Result<ProductDraft, ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        let price = parse_price(&self.price)?;

        let draft = ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            image_url: Some(self.image_url.clone()),
        };
        draft.normalized()
    }
}
