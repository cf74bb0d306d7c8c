//! # Contact Commands
//!
//! ```text
//! send Ada | ada@example.com | Order | Where is my tee?
//!        │
//!        ▼
//!   validate_contact_form ──► VALIDATION_ERROR (nothing sent)
//!        │
//!        ▼
//!   EmailSender::send_contact ──► INTEGRATION_ERROR (logged)
//!        │
//!        ▼
//!   ContactResponse { message: "Thanks, ..." }
//! ```

use serde::Serialize;
use storefront_core::validation::validate_contact_form;
use storefront_core::ContactForm;
use storefront_services::EmailSender;
use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
}

/// Validates and sends the contact form.
pub async fn submit_contact(
    email: &dyn EmailSender,
    form: &ContactForm,
) -> Result<ContactResponse, ApiError> {
    debug!(subject = %form.subject, "submit_contact command");

    validate_contact_form(form)?;

    if let Err(e) = email.send_contact(form).await {
        warn!(error = %e, "Contact form was not delivered");
        return Err(ApiError::integration(
            "Sorry, your message could not be sent. Please try again later.",
        ));
    }

    Ok(ContactResponse {
        message: format!("Thanks, {}! Your message has been sent.", form.name.trim()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use storefront_services::{ServiceError, ServiceResult};

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<ContactForm>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send_contact(&self, form: &ContactForm) -> ServiceResult<()> {
            if self.fail {
                return Err(ServiceError::UpstreamStatus {
                    status: 400,
                    body: "bad template".to_string(),
                });
            }
            self.sent.lock().unwrap().push(form.clone());
            Ok(())
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Order".to_string(),
            message: "Where is my tee?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_success() {
        let sender = RecordingSender::default();
        let response = submit_contact(&sender, &form()).await.unwrap();

        assert!(response.message.contains("Ada"));
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let sender = RecordingSender::default();
        let mut bad = form();
        bad.email = "not-an-email".to_string();

        let err = submit_contact(&sender, &bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(sender.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let sender = RecordingSender {
            fail: true,
            ..Default::default()
        };

        let err = submit_contact(&sender, &form()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegrationError);
        assert!(!err.is_blocking());
    }
}
