//! Caller-facing results of the registration and verification operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::services::verification::IssuedCode;

/// Public-safe projection of an account
///
/// Carries only the fields a caller may see; never the password credential
/// or a verification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Unique identifier of the account
    pub id: Uuid,

    /// Normalized e-mail address
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// The created account, public projection
    pub account: AccountSummary,

    /// The issued pending code (telemetry identifier and expiry)
    pub code: IssuedCode,
}

/// Result of a successful e-mail verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Always true on success; failures surface as typed errors
    pub verified: bool,
}
