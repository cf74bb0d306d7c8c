//! # Cart Store
//!
//! The shopping cart: an ordered list of lines keyed by product id, each
//! holding a quantity in `0..=MAX_LINE_QUANTITY`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Intent           Operation                     Cart Change        │
//! │  ───────────           ─────────                     ───────────        │
//! │                                                                         │
//! │  Add to cart ────────► add_product() ──────────────► push line (qty 1) │
//! │                        (already present → +1)                          │
//! │                                                                         │
//! │  Click [+] ──────────► update_quantity(id, +1) ────► qty + 1           │
//! │                        qty == 5 → QuantityLimitExceeded (no change)    │
//! │                                                                         │
//! │  Click [-] ──────────► update_quantity(id, -1) ────► qty - 1           │
//! │                        qty == 0 → control disabled; store still        │
//! │                        refuses with QuantityFloor (no change)          │
//! │                                                                         │
//! │  NOTE: lines are never removed by a decrement. Quantity 0 is a         │
//! │        retained state; only clear() empties the cart.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::MAX_LINE_QUANTITY;

// =============================================================================
// Quantity Delta
// =============================================================================

/// A single-step quantity change, the `{-1, +1}` delta of the cart contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityDelta {
    Increment,
    Decrement,
}

impl QuantityDelta {
    /// Returns the signed step this delta applies.
    pub const fn step(&self) -> i64 {
        match self {
            QuantityDelta::Increment => 1,
            QuantityDelta::Decrement => -1,
        }
    }
}

impl TryFrom<i64> for QuantityDelta {
    type Error = ValidationError;

    fn try_from(delta: i64) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(QuantityDelta::Increment),
            -1 => Ok(QuantityDelta::Decrement),
            other => Err(ValidationError::InvalidFormat {
                field: "delta".to_string(),
                reason: format!("must be +1 or -1, got {}", other),
            }),
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A product plus the quantity currently requested for purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    product: Product,
    quantity: u32,
    added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// When this line was first added.
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Whether the [+] control should be enabled.
    pub fn can_increment(&self) -> bool {
        self.quantity < MAX_LINE_QUANTITY
    }

    /// Whether the [-] control should be enabled.
    pub fn can_decrement(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id, in insertion order
/// - Every quantity is within `0..=MAX_LINE_QUANTITY`
/// - A rejected operation leaves the cart unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: new line with quantity 1
    /// - Product already in cart: same as an increment, including the limit
    /// - Another product holds a line with the same id: `ProductMismatch`,
    ///   cart unchanged
    ///
    /// ## Returns
    /// The line's quantity after the operation.
    pub fn add_product(&mut self, product: &Product) -> CoreResult<u32> {
        if let Some(line) = self.line(product.id()) {
            if line.product() != product {
                return Err(CoreError::ProductMismatch {
                    product_id: product.id().to_string(),
                });
            }
            return self.update_quantity(product.id(), QuantityDelta::Increment);
        }

        self.lines.push(CartLine::new(product.clone()));
        Ok(1)
    }

    /// Applies a single-step quantity change to an existing line.
    ///
    /// ## Errors
    /// - `LineNotFound` if the product has no line
    /// - `QuantityLimitExceeded` on increment at the maximum
    /// - `QuantityFloor` on decrement at zero
    ///
    /// ## Returns
    /// The line's quantity after the operation.
    pub fn update_quantity(&mut self, product_id: &str, delta: QuantityDelta) -> CoreResult<u32> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id() == product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;

        match delta {
            QuantityDelta::Increment => {
                if !line.can_increment() {
                    return Err(CoreError::QuantityLimitExceeded {
                        product_id: product_id.to_string(),
                        max: MAX_LINE_QUANTITY,
                    });
                }
                line.quantity += 1;
            }
            QuantityDelta::Decrement => {
                if !line.can_decrement() {
                    return Err(CoreError::QuantityFloor(product_id.to_string()));
                }
                line.quantity -= 1;
            }
        }

        Ok(line.quantity)
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id() == product_id)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn can_increment(&self, product_id: &str) -> bool {
        self.line(product_id).is_some_and(CartLine::can_increment)
    }

    pub fn can_decrement(&self, product_id: &str) -> bool {
        self.line(product_id).is_some_and(CartLine::can_decrement)
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Number of lines (including zero-quantity lines).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
