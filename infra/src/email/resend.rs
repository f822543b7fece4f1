//! Resend E-mail Service Implementation
//!
//! This module provides verification e-mail delivery through the Resend
//! HTTP API. It implements the core delivery trait for production use.
//!
//! ## Features
//!
//! - JSON API client with bearer authentication
//! - Automatic retry with backoff for rate limits and server errors
//! - Delivery id tracking
//! - Security: e-mail address masking in logs

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use yv_core::services::registration::mask_email;
use yv_core::services::verification::EmailServiceTrait;
use yv_shared::config::MailConfig;

use crate::InfrastructureError;

/// Resend API endpoint for sending e-mails
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend e-mail service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Resend API key
    pub api_key: String,
    /// RFC 5322 sender, e.g. "Yuva <noreply@yuva.com.tr>"
    pub from: String,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl ResendConfig {
    /// Create configuration from the shared mail configuration
    pub fn from_mail_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "RESEND_API_KEY not set".to_string(),
            ));
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            from: config.sender(),
            max_retries: std::env::var("RESEND_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("RESEND_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("RESEND_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::from_mail_config(&MailConfig::from_env())
    }
}

/// Successful response from the Resend send endpoint
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Resend e-mail service implementation
pub struct ResendEmailService {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend e-mail service
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        info!("Resend e-mail service initialized with sender: {}", config.from);

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(ResendConfig::from_env()?)
    }

    /// Render the verification e-mail body
    fn render_html(recipient_name: &str, code: &str) -> String {
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #2563eb;">Yuva</h2>
  <p>Merhaba {recipient_name},</p>
  <p>Hesabınızı doğrulamak için aşağıdaki kodu kullanın:</p>
  <div style="background-color: #f3f4f6; padding: 20px; text-align: center; margin: 20px 0;">
    <h1 style="color: #2563eb; font-size: 32px; margin: 0;">{code}</h1>
  </div>
  <p>Bu kod 10 dakika geçerlidir.</p>
  <p>Eğer bu işlemi siz yapmadıysanız, bu e-postayı görmezden gelebilirsiniz.</p>
  <hr style="margin: 30px 0; border: none; border-top: 1px solid #e5e7eb;">
  <p style="color: #6b7280; font-size: 14px;">Yuva - Türkiye'nin güvenilir emlak platformu</p>
</div>"#
        )
    }

    /// Send an e-mail with retry logic
    async fn send_with_retry(
        &self,
        to: &str,
        payload: &serde_json::Value,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending e-mail attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_email(to)
            );

            let response = self
                .client
                .post(RESEND_API_URL)
                .bearer_auth(&self.config.api_key)
                .json(payload)
                .send()
                .await;

            match response {
                Ok(response) if response.status().is_success() => {
                    let body: SendEmailResponse = response.json().await.map_err(|e| {
                        InfrastructureError::Email(format!("Invalid Resend response: {}", e))
                    })?;

                    info!(
                        "E-mail sent successfully to {} with id: {}",
                        mask_email(to),
                        body.id
                    );
                    return Ok(body.id);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();

                    // Client errors other than rate limiting are not retryable
                    if status.is_client_error() && status.as_u16() != 429 {
                        error!("Resend rejected the request ({}): {}", status, body);
                        return Err(InfrastructureError::Email(format!(
                            "Resend rejected the request ({}): {}",
                            status, body
                        )));
                    }

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send e-mail after {} attempts: {} {}",
                            self.config.max_retries, status, body
                        )));
                    }

                    warn!(
                        "Resend request failed ({}), retrying after {:?}",
                        status, delay
                    );
                }
                Err(e) => {
                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send e-mail after {} attempts: {}",
                            self.config.max_retries, e
                        )));
                    }

                    warn!("Resend request error ({}), retrying after {:?}", e, delay);
                }
            }

            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl EmailServiceTrait for ResendEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        recipient_name: &str,
        code: &str,
    ) -> Result<String, String> {
        let payload = serde_json::json!({
            "from": self.config.from,
            "to": [email],
            "subject": "Yuva - E-posta Doğrulama",
            "html": Self::render_html(recipient_name, code),
        });

        self.send_with_retry(email, &payload)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        let config = MailConfig {
            provider: "resend".to_string(),
            api_key: String::new(),
            from_address: "noreply@yuva.com.tr".to_string(),
            from_name: "Yuva".to_string(),
        };

        let result = ResendConfig::from_mail_config(&config);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_config_from_mail_config() {
        let config = MailConfig {
            provider: "resend".to_string(),
            api_key: "re_test_key".to_string(),
            from_address: "noreply@yuva.com.tr".to_string(),
            from_name: "Yuva".to_string(),
        };

        let resend = ResendConfig::from_mail_config(&config).unwrap();
        assert_eq!(resend.api_key, "re_test_key");
        assert_eq!(resend.from, "Yuva <noreply@yuva.com.tr>");
    }

    #[test]
    fn test_render_html_contains_code_and_name() {
        let html = ResendEmailService::render_html("Ayşe", "042137");
        assert!(html.contains("042137"));
        assert!(html.contains("Merhaba Ayşe"));
        assert!(html.contains("10 dakika"));
    }
}
