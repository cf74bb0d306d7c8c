//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  shell: "inc p-1"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  →  Result<T, ApiError>                        │  │
//! │  │                                                                  │  │
//! │  │  CoreError::QuantityLimitExceeded ─► QUANTITY_LIMIT (blocking)   │  │
//! │  │  CoreError::Validation ────────────► VALIDATION_ERROR            │  │
//! │  │  ServiceError (email send) ────────► INTEGRATION_ERROR           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Shell renders an alert box (blocking) or an inline message            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain errors never crash the shell.

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use storefront_services::ServiceError;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "QUANTITY_LIMIT",
///   "message": "You can add at most 5 of p-1"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Quantity limit reached; shown as a blocking notification
    QuantityLimit,

    /// Other cart rule violation
    CartError,

    /// External service failed
    IntegrationError,

    /// Unknown or malformed shell command
    UnknownCommand,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn integration(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::IntegrationError, message)
    }

    pub fn unknown_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, message)
    }

    /// Whether the shell must show this as a blocking alert.
    pub fn is_blocking(&self) -> bool {
        matches!(self.code, ErrorCode::QuantityLimit)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineNotFound(id) => ApiError::not_found("Cart line", &id),
            CoreError::QuantityLimitExceeded { product_id, max } => ApiError::new(
                ErrorCode::QuantityLimit,
                format!("You can add at most {} of {}", max, product_id),
            ),
            CoreError::QuantityFloor(id) => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity of {} is already zero", id),
            ),
            CoreError::ProductMismatch { product_id } => ApiError::new(
                ErrorCode::CartError,
                format!(
                    "Your cart already holds a different product with id {}. \
                     Clear the cart to add this one.",
                    product_id
                ),
            ),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_config_error() {
            tracing::warn!("Service misconfigured: {}", err);
            return ApiError::new(ErrorCode::Internal, "Service is not configured");
        }

        // Log the detail but show a generic message
        tracing::warn!("Service call failed: {}", err);
        ApiError::integration("The service is unavailable right now, please try again later")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
