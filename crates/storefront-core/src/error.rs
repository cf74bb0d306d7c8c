//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Business-rule violations (quantity limit)      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-services errors (separate crate)                           │
//! │  └── ServiceError     - Network / storage / config failures            │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the shell shows the user                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notification           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business-rule violations raised by the cart store.
///
/// None of these are fatal: the cart is left untouched whenever one is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The product id does not reference a line in the cart.
    #[error("Product {0} is not in the cart")]
    LineNotFound(String),

    /// Increment attempted on a line already at the maximum.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart line "Tee" at qty 5
    ///      │
    ///      ▼
    /// click [+]
    ///      │
    ///      ▼
    /// QuantityLimitExceeded { product_id: "p-1", max: 5 }
    ///      │
    ///      ▼
    /// UI shows a blocking notification, qty stays 5
    /// ```
    #[error("Cannot add more than {max} of product {product_id}")]
    QuantityLimitExceeded { product_id: String, max: u32 },

    /// Decrement attempted on a line already at zero.
    ///
    /// The view disables the control at zero, so this only fires when a
    /// caller bypasses it.
    #[error("Quantity of product {0} is already zero")]
    QuantityFloor(String),

    /// A different product already owns this id's cart line.
    ///
    /// Search results reuse `api-N` ids, so a line added from an earlier
    /// search can share its id with a product listed now.
    #[error("Cart already holds a different product with id {product_id}")]
    ProductMismatch { product_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_message() {
        let err = CoreError::QuantityLimitExceeded {
            product_id: "p-1".to_string(),
            max: 5,
        };
        assert_eq!(err.to_string(), "Cannot add more than 5 of product p-1");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "query".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: query is required");
    }
}
