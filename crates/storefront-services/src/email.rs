//! # Contact Email Delivery
//!
//! Sends the Contact page form through a third-party email API.
//!
//! ## Request Shape
//! ```text
//! POST {endpoint}
//! {
//!   "service_id":  "service_x",
//!   "template_id": "template_y",
//!   "user_id":     "<public key>",
//!   "template_params": { "name", "email", "subject", "message" }
//! }
//! ```
//!
//! A 2xx response is success. Anything else is logged and handed back so
//! the contact page can tell the user it failed.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use storefront_core::ContactForm;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::EmailSettings;
use crate::error::{ServiceError, ServiceResult};

/// Something that can deliver a contact form.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_contact(&self, form: &ContactForm) -> ServiceResult<()>;
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// HTTP client for the EmailJS send endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: Url,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(settings: &EmailSettings) -> ServiceResult<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(EmailJsClient {
            client,
            endpoint,
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
        })
    }

    fn request_body<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                name: form.name.trim(),
                email: form.email.trim(),
                subject: form.subject.trim(),
                message: form.message.trim(),
            },
        }
    }
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send_contact(&self, form: &ContactForm) -> ServiceResult<()> {
        debug!(endpoint = %self.endpoint, "Sending contact form");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&self.request_body(form))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Contact form request failed");
                ServiceError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Email service rejected contact form");
            return Err(ServiceError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!("Contact form sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> EmailSettings {
        EmailSettings {
            endpoint: "http://127.0.0.1:1/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
            timeout_secs: 1,
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Order".to_string(),
            message: "Where is my tee?".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let client = EmailJsClient::new(&settings()).unwrap();
        let form = form();
        let body = serde_json::to_value(client.request_body(&form)).unwrap();

        assert_eq!(
            body,
            json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Order",
                    "message": "Where is my tee?"
                }
            })
        );
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let mut bad = settings();
        bad.endpoint = "::nope".to_string();
        assert!(matches!(
            EmailJsClient::new(&bad),
            Err(ServiceError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_http_error() {
        // Port 1 on loopback refuses connections.
        let client = EmailJsClient::new(&settings()).unwrap();
        let err = client.send_contact(&form()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Http(_)));
    }
}
