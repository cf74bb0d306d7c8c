//! # State Module
//!
//! Application state for the terminal storefront.
//!
//! Separate state types instead of one `AppState`, so each command
//! declares exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Shell                                      │   │
//! │  │  owns cart_state, catalog_state, config_state, email sender     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │  CartState   │  │  CatalogState    │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │  │  tokio Mutex<    │  │  store_name      │          │
//! │  │    Cart      │  │   CatalogSource  │  │  currency_symbol │          │
//! │  │  >>          │  │  >               │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: std Mutex, never held across an await                    │
//! │  • CatalogState: tokio Mutex, held across the search request           │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
