//! Trait for e-mail delivery integration

use async_trait::async_trait;

/// Trait for outbound e-mail delivery
///
/// Implementations live in the infrastructure layer. A failure is reported
/// as a reason string; the issuer logs it and never surfaces it to callers.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to an e-mail address
    ///
    /// Returns the provider message id on success, the failure reason otherwise.
    async fn send_verification_code(
        &self,
        email: &str,
        recipient_name: &str,
        code: &str,
    ) -> Result<String, String>;
}
