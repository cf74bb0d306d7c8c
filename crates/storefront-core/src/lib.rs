//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds the cart rules, the bill aggregation and the catalog
//! construction as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/storefront (view layer)                   │   │
//! │  │   Nav ──► Products ──► Cart ──► Bill        Home/About/Contact  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐          │   │
//! │  │   │  money  │  │  cart   │  │  bill   │  │ catalog │          │   │
//! │  │   │  Money  │  │  Cart   │  │  Bill   │  │ Product │          │   │
//! │  │   │         │  │CartLine │  │BillLine │  │PriceSrc │          │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             storefront-services (I/O layer)                     │   │
//! │  │        image search, email delivery, session storage            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ContactForm)
//! - [`money`] - Integer money type
//! - [`cart`] - Cart store with the 0..=5 quantity rule
//! - [`bill`] - Bill aggregation
//! - [`catalog`] - Default catalog and search-result construction
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{compute_bill, Cart, Money, Product, QuantityDelta};
//!
//! let tee = Product::new("p-1", "Tee", Money::from_major(100), "https://img/tee.jpg").unwrap();
//! let cap = Product::new("p-2", "Cap", Money::from_major(50), "https://img/cap.jpg").unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_product(&tee).unwrap();
//! cart.update_quantity("p-1", QuantityDelta::Increment).unwrap();
//! cart.add_product(&cap).unwrap();
//! cart.update_quantity("p-2", QuantityDelta::Increment).unwrap();
//! cart.update_quantity("p-2", QuantityDelta::Increment).unwrap();
//!
//! let bill = compute_bill(&cart);
//! assert_eq!(bill.grand_total, Money::from_major(350));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{compute_bill, Bill, BillLine};
pub use cart::{Cart, CartLine, QuantityDelta};
pub use catalog::{
    default_catalog, products_from_search, FixedPriceSource, PriceSource, SeededPriceSource,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single product in the cart.
///
/// Incrementing past this is rejected, never clamped silently.
pub const MAX_LINE_QUANTITY: u32 = 5;

/// Lowest price (major units) assigned to a search result.
pub const SEARCH_PRICE_MIN: i64 = 500;

/// Highest price (major units, inclusive) assigned to a search result.
pub const SEARCH_PRICE_MAX: i64 = 1000;

/// Prefix of the identifiers given to search-result products.
pub const SEARCH_ID_PREFIX: &str = "api-";
