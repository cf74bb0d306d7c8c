//! # Configuration State
//!
//! Display settings taken from the loaded `StorefrontConfig`.
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex.

use serde::Serialize;
use storefront_core::Money;
use storefront_services::StorefrontConfig;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the navigation bar and on the home page
    pub store_name: String,

    /// Prefixed to every amount, e.g. "₹"
    pub currency_symbol: String,
}

impl ConfigState {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        ConfigState {
            store_name: config.store.name.clone(),
            currency_symbol: config.store.currency_symbol.clone(),
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// config.format_money(Money::from_major(350)) // "₹350.00"
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        if amount.minor() < 0 {
            let positive = Money::from_minor(-amount.minor());
            format!("-{}{}", self.currency_symbol, positive)
        } else {
            format!("{}{}", self.currency_symbol, amount)
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let config = ConfigState {
            store_name: "Shop".to_string(),
            currency_symbol: "₹".to_string(),
        };

        assert_eq!(config.format_money(Money::from_major(350)), "₹350.00");
        assert_eq!(config.format_money(Money::from_minor(1005)), "₹10.05");
        assert_eq!(config.format_money(Money::from_minor(-250)), "-₹2.50");
    }
}
