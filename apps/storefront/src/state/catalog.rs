//! # Catalog State
//!
//! The product list on display. A search awaits the image-search API
//! while holding the lock, so this uses an async mutex.

use storefront_services::CatalogSource;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub struct CatalogState {
    source: Mutex<CatalogSource>,
}

impl CatalogState {
    pub fn new(source: CatalogSource) -> Self {
        CatalogState {
            source: Mutex::new(source),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, CatalogSource> {
        self.source.lock().await
    }
}
