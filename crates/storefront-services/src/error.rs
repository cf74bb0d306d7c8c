//! # Service Error Types
//!
//! Error types for everything that leaves the process.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Integration   │  │     Storage             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  Storage                │ │
//! │  │  InvalidUrl     │  │  UpstreamStatus │  │  Serialization          │ │
//! │  │  ConfigLoad/Save│  │  Decode         │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Integration failures are always recovered locally: the search source
//! logs and keeps its prior list, the contact page logs and shows a
//! failure message. Nothing here is retried.

use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Integration Errors
    // =========================================================================
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The remote service answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    // =========================================================================
    // Storage Errors
    // =========================================================================
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ServiceError::UpstreamStatus {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ServiceError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ServiceError {
    fn from(err: url::ParseError) -> Self {
        ServiceError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ServiceError {
    fn from(err: toml::ser::Error) -> Self {
        ServiceError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ServiceError {
    /// Returns true if a later attempt could succeed.
    ///
    /// Informational only: the storefront never retries, but the log line
    /// tells the operator whether the failure was transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Http(_) => true,
            ServiceError::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidConfig(_)
                | ServiceError::InvalidUrl(_)
                | ServiceError::ConfigLoadFailed(_)
                | ServiceError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(ServiceError::Http("connection reset".into()).is_retryable());
        assert!(ServiceError::UpstreamStatus {
            status: 503,
            body: String::new()
        }
        .is_retryable());
        assert!(ServiceError::UpstreamStatus {
            status: 429,
            body: String::new()
        }
        .is_retryable());

        assert!(!ServiceError::UpstreamStatus {
            status: 401,
            body: "bad key".into()
        }
        .is_retryable());
        assert!(!ServiceError::Decode("missing results".into()).is_retryable());
    }

    #[test]
    fn test_config_errors() {
        assert!(ServiceError::InvalidUrl("x".into()).is_config_error());
        assert!(!ServiceError::Storage("disk".into()).is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::UpstreamStatus {
            status: 401,
            body: "OAuth error".into(),
        };
        assert_eq!(err.to_string(), "Upstream returned 401: OAuth error");
    }
}
