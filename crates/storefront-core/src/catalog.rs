//! # Catalog
//!
//! The static product list shown before any search, and the pure
//! construction of products from image-search results.
//!
//! ## Search Result Construction
//! ```text
//! query "shoes" + thumbnails [t0, t1, t2]
//!      │
//!      ▼
//! products_from_search() ← THIS MODULE
//!      │
//!      ├── api-0  "shoes"  price ∈ [500, 1000]  t0
//!      ├── api-1  "shoes"  price ∈ [500, 1000]  t1
//!      └── api-2  "shoes"  price ∈ [500, 1000]  t2
//! ```
//!
//! Prices come from an injected [`PriceSource`] so tests can pin them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::money::Money;
use crate::types::Product;
use crate::{SEARCH_ID_PREFIX, SEARCH_PRICE_MAX, SEARCH_PRICE_MIN};

// =============================================================================
// Price Sources
// =============================================================================

/// Supplies the price of each synthetic search-result product.
pub trait PriceSource: Send {
    fn next_price(&mut self) -> Money;
}

/// Uniform whole-unit prices in `[SEARCH_PRICE_MIN, SEARCH_PRICE_MAX]`.
#[derive(Debug, Clone)]
pub struct SeededPriceSource {
    rng: StdRng,
}

impl SeededPriceSource {
    /// Deterministic sequence for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        SeededPriceSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SeededPriceSource {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PriceSource for SeededPriceSource {
    fn next_price(&mut self) -> Money {
        Money::from_major(self.rng.gen_range(SEARCH_PRICE_MIN..=SEARCH_PRICE_MAX))
    }
}

/// Always returns the same price.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceSource(pub Money);

impl PriceSource for FixedPriceSource {
    fn next_price(&mut self) -> Money {
        self.0
    }
}

// =============================================================================
// Catalog Construction
// =============================================================================

/// The fixed in-memory catalog shown until a search replaces it.
pub fn default_catalog() -> Vec<Product> {
    const ENTRIES: [(&str, &str, i64, &str); 6] = [
        ("p-1", "Classic White Tee", 499, "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab"),
        ("p-2", "Denim Jacket", 1899, "https://images.unsplash.com/photo-1551537482-f2075a1d41f2"),
        ("p-3", "Canvas Sneakers", 1299, "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77"),
        ("p-4", "Leather Backpack", 2499, "https://images.unsplash.com/photo-1548036328-c9fa89d128fa"),
        ("p-5", "Wool Beanie", 349, "https://images.unsplash.com/photo-1576871337632-b9aef4c17ab9"),
        ("p-6", "Aviator Sunglasses", 899, "https://images.unsplash.com/photo-1511499767150-a48a237f0083"),
    ];

    ENTRIES
        .iter()
        .filter_map(|(id, name, price, image)| {
            Product::new(*id, *name, Money::from_major(*price), *image).ok()
        })
        .collect()
}

/// Builds one product per thumbnail, in result order.
///
/// Every product is named after the query verbatim, gets the id
/// `api-{index}` and a price drawn from `prices`.
pub fn products_from_search(
    query: &str,
    thumbnails: &[String],
    prices: &mut dyn PriceSource,
) -> Vec<Product> {
    thumbnails
        .iter()
        .enumerate()
        .filter_map(|(index, thumb)| {
            let id = format!("{}{}", SEARCH_ID_PREFIX, index);
            Product::new(id, query, prices.next_price(), thumb.as_str()).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn thumbs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://thumb/{}", i)).collect()
    }

    #[test]
    fn test_default_catalog_is_complete() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);

        let ids: HashSet<_> = catalog.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_products_from_search_shape() {
        let mut prices = SeededPriceSource::from_seed(7);
        let products = products_from_search("shoes", &thumbs(3), &mut prices);

        assert_eq!(products.len(), 3);
        let ids: Vec<_> = products.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["api-0", "api-1", "api-2"]);

        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.name(), "shoes");
            assert_eq!(p.image_url(), format!("https://thumb/{}", i));
            assert!((SEARCH_PRICE_MIN..=SEARCH_PRICE_MAX).contains(&p.price().major()));
            assert_eq!(p.price().minor_part(), 0);
        }
    }

    #[test]
    fn test_seeded_prices_are_reproducible() {
        let mut a = SeededPriceSource::from_seed(42);
        let mut b = SeededPriceSource::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.next_price(), b.next_price());
        }
    }

    #[test]
    fn test_seeded_prices_stay_in_range() {
        let mut prices = SeededPriceSource::from_entropy();
        for _ in 0..500 {
            let major = prices.next_price().major();
            assert!((SEARCH_PRICE_MIN..=SEARCH_PRICE_MAX).contains(&major));
        }
    }

    #[test]
    fn test_fixed_price_source() {
        let mut prices = FixedPriceSource(Money::from_major(640));
        let products = products_from_search("hats", &thumbs(2), &mut prices);
        assert!(products.iter().all(|p| p.price() == Money::from_major(640)));
    }

    #[test]
    fn test_empty_results() {
        let mut prices = FixedPriceSource(Money::from_major(500));
        assert!(products_from_search("shoes", &[], &mut prices).is_empty());
    }
}
