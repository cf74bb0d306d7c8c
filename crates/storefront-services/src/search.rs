//! # Catalog Search
//!
//! Replaces the displayed product list with synthetic products built from
//! an external image-search API.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CatalogSource::search("shoes")                     │
//! │                                                                         │
//! │  validate query ──► ImageSearch::search_thumbnails ──► [t0, t1, t2]     │
//! │        │                       │                            │           │
//! │        │ invalid               │ network/HTTP/decode        ▼           │
//! │        │                       │ failure          products_from_search  │
//! │        ▼                       ▼                            │           │
//! │  ┌───────────────────────────────────┐                      ▼           │
//! │  │ warn!(...) and keep prior list    │        replace displayed list    │
//! │  └───────────────────────────────────┘                      │           │
//! │                                                             ▼           │
//! │                                   SessionStore::set("searchResults")    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The displayed list only changes after a round trip completes. No
//! timeout beyond the HTTP client's, no cancellation, no retry.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_core::validation::validate_search_query;
use storefront_core::{default_catalog, products_from_search, PriceSource, Product};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::SearchSettings;
use crate::error::{ServiceError, ServiceResult};
use crate::session::{SessionStore, SEARCH_RESULTS_KEY};

// =============================================================================
// Image Search Port
// =============================================================================

/// An external image-search service.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Returns the thumbnail URL of every result, in result order.
    async fn search_thumbnails(&self, query: &str) -> ServiceResult<Vec<String>>;
}

// =============================================================================
// Unsplash Client
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    urls: HitUrls,
}

#[derive(Debug, Deserialize)]
struct HitUrls {
    thumb: String,
}

/// Extracts thumbnail URLs from a search response body.
pub fn parse_thumbnails(body: &str) -> ServiceResult<Vec<String>> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))?;
    Ok(response.results.into_iter().map(|hit| hit.urls.thumb).collect())
}

/// `GET {base_url}/search/photos?query=..&client_id=..&per_page=..`
#[derive(Debug, Clone)]
pub struct UnsplashSearchClient {
    client: reqwest::Client,
    endpoint: Url,
    access_key: String,
    per_page: u32,
}

impl UnsplashSearchClient {
    pub fn new(settings: &SearchSettings) -> ServiceResult<Self> {
        let endpoint = Url::parse(&format!(
            "{}/search/photos",
            settings.base_url.trim_end_matches('/')
        ))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(UnsplashSearchClient {
            client,
            endpoint,
            access_key: settings.access_key.clone(),
            per_page: settings.per_page,
        })
    }

    /// Full request URL for a query (credential included).
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("client_id", &self.access_key)
            .append_pair("per_page", &self.per_page.to_string());
        url
    }
}

#[async_trait]
impl ImageSearch for UnsplashSearchClient {
    async fn search_thumbnails(&self, query: &str) -> ServiceResult<Vec<String>> {
        debug!(query = %query, endpoint = %self.endpoint, "Requesting image search");

        let response = self.client.get(self.request_url(query)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_thumbnails(&body)
    }
}

/// Search backend used when running offline: every call fails, so the
/// catalog keeps whatever it already shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSearch;

#[async_trait]
impl ImageSearch for UnavailableSearch {
    async fn search_thumbnails(&self, _query: &str) -> ServiceResult<Vec<String>> {
        Err(ServiceError::Http("image search is disabled (offline)".to_string()))
    }
}

// =============================================================================
// Catalog Source
// =============================================================================

/// The product list currently on display, and where new lists come from.
pub struct CatalogSource {
    search: Arc<dyn ImageSearch>,
    store: Arc<dyn SessionStore>,
    prices: Box<dyn PriceSource>,
    products: Vec<Product>,
}

impl CatalogSource {
    /// Starts on the default catalog.
    pub fn new(
        search: Arc<dyn ImageSearch>,
        store: Arc<dyn SessionStore>,
        prices: Box<dyn PriceSource>,
    ) -> Self {
        CatalogSource {
            search,
            store,
            prices,
            products: default_catalog(),
        }
    }

    /// Loads the last persisted search results for this session.
    ///
    /// ## Returns
    /// `true` if a stored list replaced the displayed one. Missing,
    /// unreadable or corrupt values leave the list untouched.
    pub fn restore(&mut self) -> bool {
        let raw = match self.store.get(SEARCH_RESULTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "Could not read stored search results");
                return false;
            }
        };

        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => {
                info!(count = products.len(), "Restored search results from session");
                self.products = products;
                true
            }
            Err(e) => {
                warn!(error = %e, "Ignoring corrupt stored search results");
                false
            }
        }
    }

    /// Runs a search and returns the list now on display.
    ///
    /// Never fails: on any error the prior list is returned unchanged.
    pub async fn search(&mut self, query: &str) -> &[Product] {
        // Validation and the request use the trimmed text; products are
        // named after the query exactly as typed.
        let trimmed = match validate_search_query(query) {
            Ok(q) => q,
            Err(e) => {
                warn!(error = %e, "Ignoring invalid search query");
                return &self.products;
            }
        };

        let thumbnails = match self.search.search_thumbnails(&trimmed).await {
            Ok(thumbnails) => thumbnails,
            Err(e) => {
                warn!(
                    query = %trimmed,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Image search failed, keeping current products"
                );
                return &self.products;
            }
        };

        let products = products_from_search(query, &thumbnails, &mut *self.prices);
        info!(query = %query, count = products.len(), "Search results received");

        self.persist(&products);
        self.products = products;
        &self.products
    }

    /// Goes back to the default catalog and forgets stored results.
    pub fn reset_to_default(&mut self) {
        self.products = default_catalog();
        if let Err(e) = self.store.clear(SEARCH_RESULTS_KEY) {
            warn!(error = %e, "Could not clear stored search results");
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }

    fn persist(&self, products: &[Product]) {
        let result = serde_json::to_string(products)
            .map_err(ServiceError::from)
            .and_then(|json| self.store.set(SEARCH_RESULTS_KEY, &json));

        if let Err(e) = result {
            warn!(error = %e, "Could not persist search results");
        }
    }
}

impl std::fmt::Debug for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSource")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}
