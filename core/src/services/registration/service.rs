//! Main registration service implementation

use std::sync::Arc;
use tracing;

use crate::domain::value_objects::{AccountSummary, RegistrationOutcome, VerificationOutcome};
use crate::domain::entities::account::Account;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::{AccountRepository, VerificationCodeRepository};
use crate::services::verification::{EmailServiceTrait, IssuedCode, VerificationService};

use super::email_utils::{mask_email, normalize_email};
use super::validator::{validate_email, validate_registration};

/// Raw registration request as received from the transport layer
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub account_type: String,
}

/// Registration service managing the complete account verification flow
///
/// Owns the account store; code issuance and checking are delegated to the
/// [`VerificationService`], which owns the pending-code store and the mailer.
pub struct RegistrationService<A, V, E>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    E: EmailServiceTrait,
{
    /// Account repository for identity persistence
    accounts: Arc<A>,
    /// Verification service for code issuing and checking
    verification_service: Arc<VerificationService<V, E>>,
}

impl<A, V, E> RegistrationService<A, V, E>
where
    A: AccountRepository,
    V: VerificationCodeRepository,
    E: EmailServiceTrait,
{
    /// Create a new registration service
    pub fn new(accounts: Arc<A>, verification_service: Arc<VerificationService<V, E>>) -> Self {
        Self {
            accounts,
            verification_service,
        }
    }

    /// Register a new account and issue its first verification code
    ///
    /// This method:
    /// 1. Validates and normalizes the six inputs (no state on failure)
    /// 2. Rejects an e-mail address that already has an account
    /// 3. Creates the account, unverified, with a bcrypt password credential
    /// 4. Issues and delivers a verification code
    ///
    /// Returns the public projection of the account together with the issued
    /// code's telemetry identifier - never the password or the code itself.
    pub async fn register(&self, input: RegistrationInput) -> DomainResult<RegistrationOutcome> {
        let validated = validate_registration(
            &input.first_name,
            &input.last_name,
            &input.email,
            &input.phone,
            &input.password,
            &input.account_type,
        )?;

        if self.accounts.exists_by_email(&validated.email).await? {
            return Err(VerificationError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(&validated.password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password credential: {}", e),
            })?;

        let account = Account::new(
            validated.email,
            validated.first_name,
            validated.last_name,
            validated.phone,
            validated.account_type,
            password_hash,
        );

        // A concurrent create for the same address loses here with
        // EmailAlreadyRegistered from the store
        let created = self.accounts.create(account).await?;

        tracing::info!(
            email = %mask_email(&created.email),
            event = "account_created",
            account_id = %created.id,
            account_type = created.account_type.as_str(),
            "Created new unverified account"
        );

        let code = self
            .verification_service
            .issue_code(&created.email, &created.first_name)
            .await?;

        Ok(RegistrationOutcome {
            account: AccountSummary::from(&created),
            code,
        })
    }

    /// Issue a fresh verification code for an existing account
    ///
    /// Any prior pending code for the address is invalidated by the new one.
    pub async fn resend_code(&self, email: &str) -> DomainResult<IssuedCode> {
        let email = validate_email(email)?;

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(VerificationError::AccountNotFound)?;

        self.verification_service
            .issue_code(&account.email, &account.first_name)
            .await
    }

    /// Verify an e-mail address with a submitted code
    ///
    /// Delegates the code check to the verification state machine, then
    /// performs the one-way unverified → verified transition. The pending
    /// record is consumed; a second call with the same code fails with
    /// `NoPendingVerification`.
    pub async fn verify_email(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<VerificationOutcome> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "email".to_string(),
            }
            .into());
        }
        let email = normalize_email(email);

        self.verification_service.verify_code(&email, code).await?;

        // Idempotent flag flip; the pending record is already consumed
        self.accounts.set_verified(&email).await?;

        tracing::info!(
            email = %mask_email(&email),
            event = "account_verified",
            "Account e-mail address verified"
        );

        Ok(VerificationOutcome { verified: true })
    }
}
