//! # Cart Commands
//!
//! Commands behind the Cart page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│   Bill   │                        │
//! │  │  Cart    │     │ (0..=5)  │     │ (derived)│                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart (product.rs)                              │
//! │                   increment_item / decrement_item                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bill is recomputed from the cart on every request.

use serde::Serialize;
use storefront_core::{compute_bill, Bill, Cart, CartLine, Money, QuantityDelta};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;

/// One cart row as the view shows it, with its control states.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image_url: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,

    /// False at the per-line maximum
    pub can_increment: bool,

    /// False at zero
    pub can_decrement: bool,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        CartLineView {
            product_id: product.id().to_string(),
            name: product.name().to_string(),
            image_url: product.image_url().to_string(),
            unit_price: product.price(),
            quantity: line.quantity(),
            line_total: line.line_total(),
            can_increment: line.can_increment(),
            can_decrement: line.can_decrement(),
        }
    }
}

/// Cart response: every line, in insertion order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub total_quantity: u32,
}

impl CartResponse {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Applies a `+1`/`-1` change to one line.
///
/// ## Errors
/// - `VALIDATION_ERROR` for any delta other than `+1`/`-1`
/// - `NOT_FOUND` if the product has no line
/// - `QUANTITY_LIMIT` at the maximum (blocking notification)
/// - `CART_ERROR` when decrementing a zero line
pub fn update_quantity(
    cart: &CartState,
    product_id: &str,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, delta = delta, "update_quantity command");

    let delta = QuantityDelta::try_from(delta)?;
    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.update_quantity(product_id, delta)?;
        Ok(CartResponse::from(&*c))
    })
}

/// The `+` control.
pub fn increment_item(cart: &CartState, product_id: &str) -> Result<CartResponse, ApiError> {
    update_quantity(cart, product_id, QuantityDelta::Increment.step())
}

/// The `-` control.
pub fn decrement_item(cart: &CartState, product_id: &str) -> Result<CartResponse, ApiError> {
    update_quantity(cart, product_id, QuantityDelta::Decrement.step())
}

/// Computes the bill for the current cart.
pub fn generate_bill(cart: &CartState) -> Bill {
    debug!("generate_bill command");
    cart.with_cart(compute_bill)
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::Product;

    fn cart_with(products: &[(&str, i64)]) -> CartState {
        let state = CartState::new();
        state.with_cart_mut(|c| {
            for (id, major) in products {
                let product =
                    Product::new(*id, format!("Product {}", id), Money::from_major(*major), "")
                        .unwrap();
                c.add_product(&product).unwrap();
            }
        });
        state
    }

    #[test]
    fn test_get_cart_lists_lines_in_order() {
        let state = cart_with(&[("p-2", 100), ("p-1", 50)]);
        let response = get_cart(&state);

        let ids: Vec<&str> = response.lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-1"]);
        assert_eq!(response.total_quantity, 2);
    }

    #[test]
    fn test_increment_up_to_limit_then_blocking_error() {
        let state = cart_with(&[("p-1", 100)]);

        for expected in 2..=5 {
            let response = increment_item(&state, "p-1").unwrap();
            assert_eq!(response.lines[0].quantity, expected);
        }
        assert!(!get_cart(&state).lines[0].can_increment);

        let err = increment_item(&state, "p-1").unwrap_err();
        assert_eq!(err.code, ErrorCode::QuantityLimit);
        assert!(err.is_blocking());

        // Quantity unchanged after the rejected increment
        assert_eq!(get_cart(&state).lines[0].quantity, 5);
    }

    #[test]
    fn test_decrement_to_zero_keeps_line() {
        let state = cart_with(&[("p-1", 100)]);

        let response = decrement_item(&state, "p-1").unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 0);
        assert!(!response.lines[0].can_decrement);
        assert!(response.lines[0].can_increment);

        let err = decrement_item(&state, "p-1").unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(get_cart(&state).lines[0].quantity, 0);
    }

    #[test]
    fn test_unknown_line_and_bad_delta() {
        let state = cart_with(&[("p-1", 100)]);

        let err = increment_item(&state, "p-9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = update_quantity(&state, "p-1", 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&state).lines[0].quantity, 1);
    }

    #[test]
    fn test_generate_bill_tracks_cart() {
        let state = cart_with(&[("p-1", 100), ("p-2", 50)]);
        increment_item(&state, "p-1").unwrap();
        increment_item(&state, "p-2").unwrap();
        increment_item(&state, "p-2").unwrap();

        let bill = generate_bill(&state);
        assert_eq!(bill.grand_total, Money::from_major(350));

        // Recomputed, not cached
        decrement_item(&state, "p-2").unwrap();
        assert_eq!(generate_bill(&state).grand_total, Money::from_major(300));
    }

    #[test]
    fn test_clear_cart() {
        let state = cart_with(&[("p-1", 100), ("p-2", 50)]);
        let response = clear_cart(&state);

        assert!(response.is_empty());
        assert!(generate_bill(&state).is_empty());
        assert_eq!(generate_bill(&state).grand_total, Money::zero());
    }
}
