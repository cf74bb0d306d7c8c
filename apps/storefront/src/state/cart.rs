//! # Cart State
//!
//! Holds the one cart of this storefront session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Shell Input              Command                 Cart State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  add p-1 ────────────────► add_to_cart() ───────► line qty 1 or +1     │
//! │                                                                         │
//! │  inc p-1 ────────────────► increment_item() ────► qty + 1 (max 5)      │
//! │                                                                         │
//! │  dec p-1 ────────────────► decrement_item() ────► qty - 1 (min 0)      │
//! │                                                                         │
//! │  clear ──────────────────► clear_cart() ────────► lines.clear()        │
//! │                                                                         │
//! │  cart / bill ────────────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::Cart;

/// Shared cart guarded by a mutex.
///
/// The lock is never held across an `.await`. A poisoned lock is
/// recovered: every cart mutation leaves the cart consistent before it
/// can fail.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let lines = cart_state.with_cart(|cart| cart.line_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_product(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Money, Product};

    fn tee() -> Product {
        Product::new("p-1", "Classic White Tee", Money::from_major(500), "tee.jpg").unwrap()
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|cart| cart.add_product(&tee())).unwrap();

        assert_eq!(other.with_cart(|cart| cart.total_quantity()), 1);
    }

    #[test]
    fn test_starts_empty() {
        let state = CartState::default();
        assert!(state.with_cart(|cart| cart.is_empty()));
    }
}
