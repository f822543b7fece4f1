//! Outbound e-mail delivery configuration

use serde::{Deserialize, Serialize};

/// E-mail delivery service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Delivery provider ("mock" or "resend")
    pub provider: String,

    /// Provider API key (unused by the mock provider)
    pub api_key: String,

    /// Sender address, e.g. "noreply@yuva.com.tr"
    pub from_address: String,

    /// Human-readable sender name
    pub from_name: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            from_address: String::from("noreply@yuva.com.tr"),
            from_name: String::from("Yuva"),
        }
    }
}

impl MailConfig {
    /// Build configuration from `MAIL_PROVIDER` / `RESEND_API_KEY` /
    /// `MAIL_FROM_ADDRESS` / `MAIL_FROM_NAME`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            api_key: std::env::var("RESEND_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
        }
    }

    /// Full RFC 5322 sender, e.g. "Yuva <noreply@yuva.com.tr>"
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }
}
