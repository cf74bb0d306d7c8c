//! # Domain Types
//!
//! ```text
//! ┌─────────────────────┐        ┌─────────────────────┐
//! │      Product        │        │     ContactForm     │
//! │  ─────────────────  │        │  ─────────────────  │
//! │  id   ("p-1"/"api-0")│        │  name               │
//! │  name               │        │  email              │
//! │  price (Money)      │        │  subject            │
//! │  image_url          │        │  message            │
//! └─────────────────────┘        └─────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_product_id, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A purchasable product.
///
/// Immutable once constructed: catalog entries are static and search
/// results are built fresh per query. Fields are only reachable through
/// accessors so nothing can edit a product after it is listed.
///
/// Deserialization goes through [`Product::new`], so a stored product
/// that fails validation is rejected rather than restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    id: String,
    name: String,
    price: Money,
    image_url: String,
}

impl Product {
    /// Creates a product, validating id, name and price.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
    ) -> CoreResult<Self> {
        let id = id.into();
        let name = name.into();

        validate_product_id(&id)?;
        validate_product_name(&name)?;
        if !price.is_positive() {
            return Err(ValidationError::MustBePositive {
                field: "price".to_string(),
            }
            .into());
        }

        Ok(Product {
            id,
            name,
            price,
            image_url: image_url.into(),
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// Wire shape of a [`Product`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    price: Money,
    image_url: String,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CoreError;

    fn try_from(record: ProductRecord) -> CoreResult<Self> {
        Product::new(record.id, record.name, record.price, record.image_url)
    }
}

// =============================================================================
// Contact Form
// =============================================================================

/// Values submitted from the Contact page to the email-delivery service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
