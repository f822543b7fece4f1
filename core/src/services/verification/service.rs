//! Main verification service implementation

use std::sync::Arc;
use tracing;

use crate::domain::entities::verification_code::{PendingVerification, CODE_LENGTH};
use crate::errors::{DomainResult, ValidationError, VerificationError};
use crate::repositories::VerificationCodeRepository;
use crate::services::registration::mask_email;

use super::config::VerificationServiceConfig;
use super::traits::EmailServiceTrait;
use super::types::IssuedCode;

/// Verification service for issuing and checking e-mail verification codes
pub struct VerificationService<V: VerificationCodeRepository, E: EmailServiceTrait> {
    /// Store for pending verification records
    codes: Arc<V>,
    /// E-mail service for code delivery
    email_service: Arc<E>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<V: VerificationCodeRepository, E: EmailServiceTrait> VerificationService<V, E> {
    /// Create a new verification service
    pub fn new(
        codes: Arc<V>,
        email_service: Arc<E>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            codes,
            email_service,
            config,
        }
    }

    /// Issue a fresh verification code for an e-mail address
    ///
    /// This method:
    /// 1. Generates a new uniformly random 6-digit code
    /// 2. Stores the pending record, replacing any prior one for the address
    /// 3. Delivers the code by e-mail
    ///
    /// Delivery failure never fails the operation: the failure is logged and
    /// the stored code stays valid, so verification is not blocked by an
    /// undeliverable e-mail.
    pub async fn issue_code(
        &self,
        email: &str,
        recipient_name: &str,
    ) -> DomainResult<IssuedCode> {
        let pending = PendingVerification::new_with_expiration(
            email.to_string(),
            self.config.code_expiration_minutes,
        );
        let issued = IssuedCode {
            code_id: pending.id,
            expires_at: pending.expires_at,
        };

        tracing::info!(
            email = %mask_email(email),
            event = "code_issued",
            code_id = %pending.id,
            expires_at = %pending.expires_at,
            "Issued new verification code"
        );

        // Atomic overwrite: any prior pending code for this address is gone
        let code = pending.code.clone();
        self.codes.put(pending).await?;

        match self
            .email_service
            .send_verification_code(email, recipient_name, &code)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    email = %mask_email(email),
                    event = "code_delivered",
                    message_id = %message_id,
                    "Verification code delivered"
                );
            }
            Err(reason) => {
                // The code stays retrievable through a resend; callers are
                // not told about the delivery problem.
                tracing::error!(
                    email = %mask_email(email),
                    event = "delivery_failed",
                    reason = %reason,
                    code_id = %issued.code_id,
                    "Verification e-mail delivery failed, code remains valid"
                );
            }
        }

        Ok(issued)
    }

    /// Check a submitted code against the pending record for an e-mail address
    ///
    /// State transitions, in order:
    /// 1. Missing e-mail or code → `MissingField`
    /// 2. Code not exactly 6 ASCII digits → `MalformedCode`
    /// 3. No pending record → `NoPendingVerification`
    /// 4. Past the validity window → `CodeExpired`
    /// 5. Attempt budget used up → `TooManyAttempts`
    /// 6. Mismatch → attempt counted, `CodeMismatch` (or `TooManyAttempts`
    ///    when the budget runs out on this attempt)
    /// 7. Match → pending record deleted (one-shot consumption)
    pub async fn verify_code(&self, email: &str, submitted: &str) -> DomainResult<()> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "email".to_string(),
            }
            .into());
        }
        if submitted.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "code".to_string(),
            }
            .into());
        }

        if submitted.len() != CODE_LENGTH || !submitted.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                email = %mask_email(email),
                event = "malformed_code",
                code_length = submitted.len(),
                "Malformed verification code submitted"
            );
            return Err(ValidationError::MalformedCode.into());
        }

        let pending = match self.codes.get(email).await? {
            Some(pending) => pending,
            None => {
                return Err(VerificationError::NoPendingVerification.into());
            }
        };

        if pending.is_expired() {
            tracing::warn!(
                email = %mask_email(email),
                event = "code_expired",
                code_id = %pending.id,
                "Expired verification code submitted"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if pending.attempts_exhausted() {
            return Err(VerificationError::TooManyAttempts.into());
        }

        if !pending.matches(submitted) {
            let attempts = self.codes.increment_attempts(email).await?;
            let remaining = (self.config.max_attempts - attempts).max(0);

            tracing::warn!(
                email = %mask_email(email),
                event = "code_mismatch",
                attempts = attempts,
                remaining = remaining,
                "Verification code mismatch"
            );

            if attempts >= self.config.max_attempts {
                return Err(VerificationError::TooManyAttempts.into());
            }
            return Err(VerificationError::CodeMismatch { remaining }.into());
        }

        // One-shot consumption: a matched code can never be replayed
        self.codes.delete(email).await?;

        tracing::info!(
            email = %mask_email(email),
            event = "code_verified",
            code_id = %pending.id,
            "Verification code accepted"
        );

        Ok(())
    }
}
