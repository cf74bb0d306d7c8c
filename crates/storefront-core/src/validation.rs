//! # Validation Module
//!
//! Input validation for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell input parsing (apps/storefront)                        │
//! │  └── Missing arguments, unknown commands                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Search queries                                                    │
//! │  ├── Contact form fields                                               │
//! │  └── Product construction                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: External services                                            │
//! │  └── Their own request validation (non-2xx responses)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_search_query;
//!
//! assert_eq!(validate_search_query("  shoes ").unwrap(), "shoes");
//! assert!(validate_search_query("").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ContactForm;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_QUERY_LEN: usize = 100;
const MAX_NAME_LEN: usize = 200;
const MAX_SUBJECT_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 2000;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product identifier (non-empty, no whitespace).
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;
    max_len("name", name, MAX_NAME_LEN)
}

// =============================================================================
// Search Validators
// =============================================================================

/// Validates a free-text search query.
///
/// ## Rules
/// - Must not be blank (an empty query would replace the listing with noise)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();
    required("query", query)?;
    max_len("query", query, MAX_QUERY_LEN)?;
    Ok(query.to_string())
}

// =============================================================================
// Contact Form Validators
// =============================================================================

/// Validates every field of the contact form.
///
/// ## Rules
/// - name, email, subject, message are all required
/// - email must look like `local@domain.tld`
/// - message at most 2000 characters
pub fn validate_contact_form(form: &ContactForm) -> ValidationResult<()> {
    required("name", &form.name)?;
    max_len("name", &form.name, MAX_NAME_LEN)?;
    validate_email(&form.email)?;
    required("subject", &form.subject)?;
    max_len("subject", &form.subject, MAX_SUBJECT_LEN)?;
    required("message", &form.message)?;
    max_len("message", &form.message, MAX_MESSAGE_LEN)
}

/// Validates an email address shape. Deliverability is the email
/// service's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    required("email", email)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("missing '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one '@' after a name"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid("domain must look like example.com"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Order".to_string(),
            message: "Where is my tee?".to_string(),
        }
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("shoes").unwrap(), "shoes");
        assert_eq!(validate_search_query("  red shoes  ").unwrap(), "red shoes");

        assert!(validate_search_query("").is_err());
        assert!(validate_search_query("   ").is_err());
        assert!(validate_search_query(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("api-0").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("has space").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("a.b@mail.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("ada@example..com").is_err());
    }

    #[test]
    fn test_validate_contact_form() {
        assert!(validate_contact_form(&form()).is_ok());

        let mut missing_subject = form();
        missing_subject.subject = String::new();
        assert_eq!(
            validate_contact_form(&missing_subject).unwrap_err(),
            ValidationError::Required {
                field: "subject".to_string()
            }
        );

        let mut long_message = form();
        long_message.message = "x".repeat(2001);
        assert!(matches!(
            validate_contact_form(&long_message),
            Err(ValidationError::TooLong { .. })
        ));
    }
}
