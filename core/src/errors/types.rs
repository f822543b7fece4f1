//! Domain-specific error types for registration and e-mail verification
//!
//! This module provides error types with bilingual support (English and
//! Turkish) for intake validation and verification state handling. Each
//! variant carries a stable kind identifier used by the transport layer.

use thiserror::Error;

/// Intake validation errors with bilingual messages
///
/// These are client input errors: always recoverable by the caller
/// correcting the input, never retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field} | Zorunlu alan: {field}")]
    MissingField { field: String },

    #[error("Enter a valid e-mail address | Geçerli bir e-posta adresi girin")]
    InvalidEmailFormat,

    #[error("Password must be at least {min} characters | Şifre en az {min} karakter olmalıdır")]
    WeakPassword { min: usize },

    #[error("Invalid account type: {value} | Geçersiz hesap türü: {value}")]
    AccountTypeInvalid { value: String },

    #[error("Verification code must be 6 digits | Doğrulama kodu 6 haneli olmalıdır")]
    MalformedCode,
}

impl ValidationError {
    /// Stable kind identifier for programmatic handling
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            ValidationError::WeakPassword { .. } => "WEAK_PASSWORD",
            ValidationError::AccountTypeInvalid { .. } => "ACCOUNT_TYPE_INVALID",
            ValidationError::MalformedCode => "MALFORMED_CODE",
        }
    }
}

/// Verification state errors with bilingual messages
///
/// These reflect the current record state; they are caller-visible and are
/// not retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("This e-mail address is already registered | Bu e-posta adresi zaten kullanılıyor")]
    EmailAlreadyRegistered,

    #[error("No account registered with this e-mail address | Bu e-posta adresi ile kayıtlı kullanıcı bulunamadı")]
    AccountNotFound,

    #[error("No pending verification for this e-mail address | Bu e-posta adresi için bekleyen doğrulama bulunamadı")]
    NoPendingVerification,

    #[error("Verification code expired, request a new one | Doğrulama kodunun süresi doldu, yeni kod isteyin")]
    CodeExpired,

    #[error("Incorrect verification code, {remaining} attempt(s) remaining | Doğrulama kodu hatalı, {remaining} deneme hakkı kaldı")]
    CodeMismatch { remaining: i32 },

    #[error("Too many failed attempts, request a new code | Çok fazla hatalı deneme, yeni kod isteyin")]
    TooManyAttempts,
}

impl VerificationError {
    /// Stable kind identifier for programmatic handling
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            VerificationError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            VerificationError::NoPendingVerification => "NO_PENDING_VERIFICATION",
            VerificationError::CodeExpired => "CODE_EXPIRED",
            VerificationError::CodeMismatch { .. } => "CODE_MISMATCH",
            VerificationError::TooManyAttempts => "TOO_MANY_ATTEMPTS",
        }
    }
}

/// Helper function to extract the English half of a bilingual message
pub fn extract_english_message(message: &str) -> &str {
    message.split(" | ").next().unwrap_or(message)
}

/// Helper function to extract the Turkish half of a bilingual message
pub fn extract_turkish_message(message: &str) -> &str {
    message.split(" | ").nth(1).unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let error = ValidationError::MissingField {
            field: "email".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Required field: email"));
        assert!(message.contains("Zorunlu alan: email"));
    }

    #[test]
    fn test_weak_password_carries_minimum() {
        let message = ValidationError::WeakPassword { min: 8 }.to_string();
        assert!(message.contains("8 characters"));
        assert!(message.contains("8 karakter"));
    }

    #[test]
    fn test_verification_error_kinds() {
        assert_eq!(VerificationError::CodeExpired.kind(), "CODE_EXPIRED");
        assert_eq!(
            VerificationError::CodeMismatch { remaining: 2 }.kind(),
            "CODE_MISMATCH"
        );
        assert_eq!(
            VerificationError::TooManyAttempts.kind(),
            "TOO_MANY_ATTEMPTS"
        );
    }

    #[test]
    fn test_message_extraction() {
        let bilingual = "Verification code expired, request a new one | Doğrulama kodunun süresi doldu, yeni kod isteyin";
        assert_eq!(
            extract_english_message(bilingual),
            "Verification code expired, request a new one"
        );
        assert_eq!(
            extract_turkish_message(bilingual),
            "Doğrulama kodunun süresi doldu, yeni kod isteyin"
        );

        let english_only = "Only English";
        assert_eq!(extract_english_message(english_only), "Only English");
        assert_eq!(extract_turkish_message(english_only), "Only English");
    }

    #[test]
    fn test_code_mismatch_remaining_attempts() {
        let message = VerificationError::CodeMismatch { remaining: 3 }.to_string();
        assert!(message.contains("3 attempt(s)"));
        assert!(message.contains("3 deneme"));
    }
}
