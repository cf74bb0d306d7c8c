//! # storefront-services: External Integrations
//!
//! Everything in the storefront that touches the network or storage.
//!
//! ## Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Services Layer                                   │
//! │                                                                         │
//! │  ┌───────────────────┐      ┌───────────────────┐                       │
//! │  │  CatalogSource    │─────►│  ImageSearch      │──► image-search API   │
//! │  │  (search.rs)      │      │  (Unsplash)       │                       │
//! │  │                   │─────►│  SessionStore     │──► memory / JSON file │
//! │  └───────────────────┘      └───────────────────┘                       │
//! │                                                                         │
//! │  ┌───────────────────┐                                                  │
//! │  │  EmailSender      │─────────────────────────────► email API          │
//! │  │  (email.rs)       │                                                  │
//! │  └───────────────────┘                                                  │
//! │                                                                         │
//! │  StorefrontConfig (config.rs): endpoints + credentials, TOML + env      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//! Network and storage failures never escape as panics. The catalog
//! swallows them after logging; the email sender returns them so the
//! contact page can report the failure.

pub mod config;
pub mod email;
pub mod error;
pub mod search;
pub mod session;

pub use config::StorefrontConfig;
pub use email::{EmailJsClient, EmailSender};
pub use error::{ServiceError, ServiceResult};
pub use search::{CatalogSource, ImageSearch, UnavailableSearch, UnsplashSearchClient};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SEARCH_RESULTS_KEY};
