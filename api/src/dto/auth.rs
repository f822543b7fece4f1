use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use yv_core::domain::value_objects::AccountSummary;

/// Request body for POST /api/v1/auth/register
///
/// Only size sanity checks happen here; field presence, e-mail shape,
/// password strength and the account-type enum are enforced by the core
/// validator so their error kinds stay precise.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 100))]
    pub first_name: String,

    #[validate(length(max = 100))]
    pub last_name: String,

    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(max = 32))]
    pub phone: String,

    #[validate(length(max = 128))]
    pub password: String,

    /// "buyer", "seller" or "agent"
    #[validate(length(max = 16))]
    pub account_type: String,
}

/// Request body for POST /api/v1/auth/resend-verification
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendCodeRequest {
    #[validate(length(max = 255))]
    pub email: String,
}

/// Request body for POST /api/v1/auth/verify-email
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(length(max = 255))]
    pub email: String,

    /// 6-digit verification code
    #[validate(length(max = 16))]
    pub code: String,
}

/// Public account projection returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<AccountSummary> for AccountDto {
    fn from(summary: AccountSummary) -> Self {
        Self {
            id: summary.id,
            email: summary.email,
            first_name: summary.first_name,
            last_name: summary.last_name,
        }
    }
}

/// Success payload of the register endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub message: String,
    pub account: AccountDto,
}

/// Success payload of the resend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendCodeData {
    pub message: String,
    pub issued: bool,
}

/// Success payload of the verify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailData {
    pub message: String,
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_normal_input() {
        let request = RegisterRequest {
            first_name: "Ayşe".to_string(),
            last_name: "Yıldız".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "5551234567".to_string(),
            password: "password1".to_string(),
            account_type: "buyer".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_oversized_field() {
        let request = RegisterRequest {
            first_name: "a".repeat(101),
            last_name: "Yıldız".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "5551234567".to_string(),
            password: "password1".to_string(),
            account_type: "buyer".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_verify_request_deserialization() {
        let request: VerifyEmailRequest =
            serde_json::from_str(r#"{"email":"ayse@example.com","code":"000042"}"#).unwrap();
        assert_eq!(request.code, "000042");
        assert!(request.validate().is_ok());
    }
}
