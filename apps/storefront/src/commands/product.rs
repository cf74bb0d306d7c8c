//! # Product Commands
//!
//! Commands behind the Products page.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  search shoes                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogSource::search("shoes")                                         │
//! │       │                                                                 │
//! │       ├── ok ────► api-0..api-N, name "shoes", price 500..=1000         │
//! │       │            persisted under "searchResults"                      │
//! │       │                                                                 │
//! │       └── error ─► logged, previous list kept                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto> (whatever is now on display)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{Money, Product};
use tracing::{debug, info};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Product as the listing shows it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image_url: String,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id().to_string(),
            name: p.name().to_string(),
            price: p.price(),
            image_url: p.image_url().to_string(),
        }
    }
}

fn to_dtos(products: &[Product]) -> Vec<ProductDto> {
    products.iter().map(ProductDto::from).collect()
}

/// Lists the products currently on display.
pub async fn list_products(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("list_products command");
    to_dtos(catalog.lock().await.products())
}

/// Searches the image API and replaces the listing with the results.
///
/// Search failures are not errors here: the listing simply stays as it
/// was and the failure is only logged.
pub async fn search_products(catalog: &CatalogState, query: &str) -> Vec<ProductDto> {
    debug!(query = %query, "search_products command");
    let mut source = catalog.lock().await;
    to_dtos(source.search(query).await)
}

/// Puts the default catalog back on display.
pub async fn reset_products(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("reset_products command");
    let mut source = catalog.lock().await;
    source.reset_to_default();
    to_dtos(source.products())
}

/// Adds a displayed product to the cart.
///
/// ## Behavior
/// - Not in cart yet: new line with quantity 1
/// - Already in cart: same as the `+` control, so the limit applies
///
/// The cart keeps its own copy of the product, so a later search that
/// replaces the listing does not change lines already in the cart. A
/// listed product whose id matches a line holding a different product
/// is rejected with `CART_ERROR` and the cart is left unchanged.
pub async fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .lock()
        .await
        .find(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    let quantity = cart.with_cart_mut(|c| c.add_product(&product))?;
    info!(product_id = %product_id, quantity = quantity, "Added to cart");

    Ok(cart.with_cart(|c| CartResponse::from(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Arc;
    use storefront_core::FixedPriceSource;
    use storefront_services::{
        CatalogSource, ImageSearch, MemorySessionStore, ServiceResult, UnavailableSearch,
    };

    struct ThreeShoes;

    #[async_trait]
    impl ImageSearch for ThreeShoes {
        async fn search_thumbnails(&self, _query: &str) -> ServiceResult<Vec<String>> {
            Ok(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
        }
    }

    fn catalog(search: Arc<dyn ImageSearch>) -> CatalogState {
        CatalogState::new(CatalogSource::new(
            search,
            Arc::new(MemorySessionStore::new()),
            Box::new(FixedPriceSource(Money::from_major(700))),
        ))
    }

    #[tokio::test]
    async fn test_list_starts_on_default_catalog() {
        let catalog = catalog(Arc::new(UnavailableSearch));
        let products = list_products(&catalog).await;

        assert_eq!(products.len(), 6);
        assert_eq!(products[0].id, "p-1");
    }

    #[tokio::test]
    async fn test_search_replaces_listing() {
        let catalog = catalog(Arc::new(ThreeShoes));
        let products = search_products(&catalog, "shoes").await;

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["api-0", "api-1", "api-2"]);
        assert!(products.iter().all(|p| p.name == "shoes"));
        assert_eq!(list_products(&catalog).await, products);

        let reset = reset_products(&catalog).await;
        assert_eq!(reset.len(), 6);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_listing() {
        let catalog = catalog(Arc::new(UnavailableSearch));
        let before = list_products(&catalog).await;

        let after = search_products(&catalog, "shoes").await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_add_to_cart_then_limit() {
        let catalog = catalog(Arc::new(UnavailableSearch));
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, "p-1").await.unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 1);

        for _ in 0..4 {
            add_to_cart(&catalog, &cart, "p-1").await.unwrap();
        }
        let err = add_to_cart(&catalog, &cart, "p-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuantityLimit);
        assert_eq!(cart.with_cart(|c| c.total_quantity()), 5);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let catalog = catalog(Arc::new(UnavailableSearch));
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "api-0").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_cart_line_survives_new_search() {
        let catalog = catalog(Arc::new(ThreeShoes));
        let cart = CartState::new();

        search_products(&catalog, "shoes").await;
        add_to_cart(&catalog, &cart, "api-1").await.unwrap();

        search_products(&catalog, "hats").await;
        let line = cart.with_cart(|c| c.line("api-1").map(|l| l.product().name().to_string()));
        assert_eq!(line.as_deref(), Some("shoes"));
    }

    #[tokio::test]
    async fn test_reused_id_from_new_search_is_rejected() {
        let catalog = catalog(Arc::new(ThreeShoes));
        let cart = CartState::new();

        search_products(&catalog, "shoes").await;
        add_to_cart(&catalog, &cart, "api-1").await.unwrap();

        search_products(&catalog, "hats").await;
        let err = add_to_cart(&catalog, &cart, "api-1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(!err.is_blocking());

        let lines = get_cart_lines(&cart);
        assert_eq!(lines, vec![("shoes".to_string(), 1)]);
    }

    fn get_cart_lines(cart: &CartState) -> Vec<(String, u32)> {
        cart.with_cart(|c| {
            c.lines()
                .iter()
                .map(|l| (l.product().name().to_string(), l.quantity()))
                .collect()
        })
    }
}
