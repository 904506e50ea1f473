//! Product domain model.
//!
//! # Responsibility
//! - Define the canonical product record and its candidate (`ProductDraft`).
//! - Enforce name/price invariants at every construction path.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never nil.
//! - `name` is stored trimmed and is never empty.
//! - `price` is finite and `> 0`.
//! - `image_url` is `None` rather than a blank string.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a catalog record.
pub type ProductId = Uuid;

/// Image shown when a product has no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Validation failures for product input.
///
/// Display text for name/price failures matches what the add/edit dialogs
/// show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    NilId,
    EmptyName,
    InvalidPrice(f64),
    UnparsablePrice(String),
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "product id must not be nil"),
            Self::EmptyName => write!(f, "Product name is required"),
            Self::InvalidPrice(_) | Self::UnparsablePrice(_) => {
                write!(f, "Please enter a valid price")
            }
        }
    }
}

impl Error for ProductValidationError {}

/// Candidate product record without identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Creates a draft with empty description and no image.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns a trimmed copy that satisfies all field invariants.
    ///
    /// # Errors
    /// - `EmptyName` when the name is blank after trimming.
    /// - `InvalidPrice` when the price is not finite or not positive.
    pub fn normalized(&self) -> Result<Self, ProductValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        let price = validate_price(self.price)?;

        Ok(Self {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: normalize_image_url(self.image_url.as_deref()),
        })
    }
}

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductWire")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product from a draft with a freshly generated ID.
    pub fn new(draft: &ProductDraft) -> Result<Self, ProductValidationError> {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a product from a draft under a caller-provided ID.
    ///
    /// Used by update paths, where identity must be preserved.
    pub fn with_id(id: ProductId, draft: &ProductDraft) -> Result<Self, ProductValidationError> {
        if id.is_nil() {
            return Err(ProductValidationError::NilId);
        }
        let draft = draft.normalized()?;
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
        })
    }

    /// Checks record invariants without modifying the record.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.is_nil() {
            return Err(ProductValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        validate_price(self.price)?;
        Ok(())
    }

    /// Returns the editable fields of this record.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }

    /// Image source for display, falling back to the placeholder.
    pub fn image_src(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductWire {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<ProductWire> for Product {
    type Error = ProductValidationError;

    fn try_from(wire: ProductWire) -> Result<Self, Self::Error> {
        let draft = ProductDraft {
            name: wire.name,
            description: wire.description,
            price: wire.price,
            image_url: wire.image_url,
        };
        Self::with_id(wire.id, &draft)
    }
}

pub(crate) fn validate_price(price: f64) -> Result<f64, ProductValidationError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(ProductValidationError::InvalidPrice(price))
    }
}

fn normalize_image_url(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{normalize_image_url, validate_price, ProductDraft, ProductValidationError};

    #[test]
    fn validate_price_rejects_zero_negative_and_non_finite() {
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-1.5).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert_eq!(validate_price(0.01), Ok(0.01));
    }

    #[test]
    fn normalize_image_url_drops_blank_values() {
        assert_eq!(normalize_image_url(Some("   ")), None);
        assert_eq!(normalize_image_url(None), None);
        assert_eq!(
            normalize_image_url(Some(" https://img.test/a.png ")).as_deref(),
            Some("https://img.test/a.png")
        );
    }

    #[test]
    fn normalized_checks_name_before_price() {
        let err = ProductDraft::new("  ", -3.0).normalized().unwrap_err();
        assert_eq!(err, ProductValidationError::EmptyName);
    }
}
