//! # Commands Module
//!
//! Everything the shell can ask the storefront to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── pages.rs    ◄─── Home, About, Contact text and the navigation bar
//! ├── product.rs  ◄─── Listing, search, add to cart
//! ├── cart.rs     ◄─── Quantity controls, bill, clear
//! └── contact.rs  ◄─── Contact form submission
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! async fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//! ```
//!
//! Commands return serializable response types or `ApiError`; the shell
//! decides how to render them.

pub mod cart;
pub mod contact;
pub mod pages;
pub mod product;

pub use cart::*;
pub use contact::*;
pub use pages::*;
pub use product::*;
