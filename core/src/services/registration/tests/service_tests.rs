//! Tests for the registration service

use chrono::Duration;
use std::sync::Arc;

use crate::errors::{DomainError, ValidationError, VerificationError};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockVerificationCodeRepository,
    VerificationCodeRepository,
};
use crate::services::registration::{RegistrationInput, RegistrationService};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::MockEmailService;

struct TestContext {
    accounts: Arc<MockAccountRepository>,
    codes: Arc<MockVerificationCodeRepository>,
    mailer: Arc<MockEmailService>,
    service: RegistrationService<
        MockAccountRepository,
        MockVerificationCodeRepository,
        MockEmailService,
    >,
}

fn context(should_fail_delivery: bool) -> TestContext {
    let accounts = Arc::new(MockAccountRepository::new());
    let codes = Arc::new(MockVerificationCodeRepository::new());
    let mailer = Arc::new(MockEmailService::new(should_fail_delivery));
    let verification = Arc::new(VerificationService::new(
        codes.clone(),
        mailer.clone(),
        VerificationServiceConfig::default(),
    ));
    let service = RegistrationService::new(accounts.clone(), verification);

    TestContext {
        accounts,
        codes,
        mailer,
        service,
    }
}

fn ayse() -> RegistrationInput {
    RegistrationInput {
        first_name: "Ayşe".to_string(),
        last_name: "Yıldız".to_string(),
        email: "ayse@example.com".to_string(),
        phone: "5551234567".to_string(),
        password: "password1".to_string(),
        account_type: "buyer".to_string(),
    }
}

/// A code guaranteed not to match the stored one
fn wrong_code(stored: &str) -> &'static str {
    if stored == "000000" {
        "000001"
    } else {
        "000000"
    }
}

#[tokio::test]
async fn test_register_creates_account_and_pending_code() {
    let ctx = context(false);

    let outcome = ctx.service.register(ayse()).await.unwrap();
    assert_eq!(outcome.account.email, "ayse@example.com");
    assert_eq!(outcome.account.first_name, "Ayşe");

    let account = ctx
        .accounts
        .find_by_email("ayse@example.com")
        .await
        .unwrap()
        .expect("account created");
    assert!(!account.is_verified);
    assert_eq!(account.id, outcome.account.id);

    let pending = ctx
        .codes
        .get("ayse@example.com")
        .await
        .unwrap()
        .expect("pending verification created");
    assert_eq!(pending.code.len(), 6);
    assert!(pending.code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(pending.expires_at, pending.issued_at + Duration::minutes(10));
    assert_eq!(pending.id, outcome.code.code_id);
}

#[tokio::test]
async fn test_register_hashes_password_credential() {
    let ctx = context(false);
    ctx.service.register(ayse()).await.unwrap();

    let account = ctx
        .accounts
        .find_by_email("ayse@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(account.password_hash, "password1");
    assert!(bcrypt::verify("password1", &account.password_hash).unwrap());
}

#[tokio::test]
async fn test_full_verification_scenario() {
    let ctx = context(false);

    ctx.service.register(ayse()).await.unwrap();

    // Wrong code first
    let real = ctx.mailer.get_sent_code("ayse@example.com").unwrap();
    let result = ctx
        .service
        .verify_email("ayse@example.com", wrong_code(&real))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::CodeMismatch { .. }))
    ));

    // The real code verifies the account
    let outcome = ctx.service.verify_email("ayse@example.com", &real).await.unwrap();
    assert!(outcome.verified);

    let account = ctx
        .accounts
        .find_by_email("ayse@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(account.is_verified);

    // Single use: replaying the consumed code fails
    let result = ctx.service.verify_email("ayse@example.com", &real).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::NoPendingVerification
        ))
    ));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let ctx = context(false);
    ctx.service.register(ayse()).await.unwrap();

    let result = ctx.service.register(ayse()).await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::EmailAlreadyRegistered
        ))
    ));
}

#[tokio::test]
async fn test_register_weak_password_creates_no_state() {
    let ctx = context(false);

    let mut input = ayse();
    input.password = "short1".to_string();

    let result = ctx.service.register(input).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::WeakPassword { .. }))
    ));

    assert!(!ctx.accounts.exists_by_email("ayse@example.com").await.unwrap());
    assert!(ctx.codes.get("ayse@example.com").await.unwrap().is_none());
    assert!(ctx.mailer.get_sent_code("ayse@example.com").is_none());
}

#[tokio::test]
async fn test_register_missing_field() {
    let ctx = context(false);

    let mut input = ayse();
    input.phone = "".to_string();

    let result = ctx.service.register(input).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::MissingField { .. }))
    ));
}

#[tokio::test]
async fn test_register_invalid_account_type() {
    let ctx = context(false);

    let mut input = ayse();
    input.account_type = "tenant".to_string();

    let result = ctx.service.register(input).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(
            ValidationError::AccountTypeInvalid { .. }
        ))
    ));
}

#[tokio::test]
async fn test_register_survives_delivery_failure() {
    let ctx = context(true);

    ctx.service.register(ayse()).await.unwrap();

    // Nothing was delivered, but the stored code still verifies
    assert!(ctx.mailer.get_sent_code("ayse@example.com").is_none());
    let code = ctx.codes.get("ayse@example.com").await.unwrap().unwrap().code;
    let outcome = ctx.service.verify_email("ayse@example.com", &code).await.unwrap();
    assert!(outcome.verified);
}

#[tokio::test]
async fn test_resend_supersedes_prior_code() {
    let ctx = context(false);

    ctx.service.register(ayse()).await.unwrap();
    let old_code = ctx.codes.get("ayse@example.com").await.unwrap().unwrap().code;

    ctx.service.resend_code("ayse@example.com").await.unwrap();
    let new_code = ctx.codes.get("ayse@example.com").await.unwrap().unwrap().code;

    // The old code no longer verifies (unless the draw collided)
    if old_code != new_code {
        let result = ctx.service.verify_email("ayse@example.com", &old_code).await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::CodeMismatch { .. }))
        ));
    }

    let outcome = ctx
        .service
        .verify_email("ayse@example.com", &new_code)
        .await
        .unwrap();
    assert!(outcome.verified);
}

#[tokio::test]
async fn test_resend_unknown_email() {
    let ctx = context(false);

    let result = ctx.service.resend_code("nouser@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::AccountNotFound))
    ));
}

#[tokio::test]
async fn test_resend_invalid_email_format() {
    let ctx = context(false);

    let result = ctx.service.resend_code("not-an-email").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::InvalidEmailFormat))
    ));
}

#[tokio::test]
async fn test_verify_without_registration() {
    let ctx = context(false);

    let result = ctx.service.verify_email("nouser@example.com", "123456").await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(
            VerificationError::NoPendingVerification
        ))
    ));
}

#[tokio::test]
async fn test_email_identity_is_case_insensitive() {
    let ctx = context(false);

    let mut input = ayse();
    input.email = "Ayse@Example.COM".to_string();
    let outcome = ctx.service.register(input).await.unwrap();
    assert_eq!(outcome.account.email, "ayse@example.com");

    // Mixed-case lookups resolve to the same record
    let code = ctx.codes.get("ayse@example.com").await.unwrap().unwrap().code;
    let outcome = ctx
        .service
        .verify_email("AYSE@example.com", &code)
        .await
        .unwrap();
    assert!(outcome.verified);
}
