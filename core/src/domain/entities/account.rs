//! Account entity representing a registered user of the Yuva marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of an account on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// A user browsing and purchasing listings
    Buyer,
    /// A user publishing property listings
    Seller,
    /// A professional real-estate agent
    Agent,
}

impl AccountType {
    /// Parse an account type from its wire representation (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "buyer" => Some(AccountType::Buyer),
            "seller" => Some(AccountType::Seller),
            "agent" => Some(AccountType::Agent),
            _ => None,
        }
    }

    /// Wire representation of the account type
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Buyer => "buyer",
            AccountType::Seller => "seller",
            AccountType::Agent => "agent",
        }
    }
}

/// Account entity representing a registered user
///
/// The e-mail address is the unique, case-insensitive key of an account;
/// it is normalized to lowercase before the entity is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalized (lowercase) e-mail address
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact phone number
    pub phone: String,

    /// Role of the account on the marketplace
    pub account_type: AccountType,

    /// Opaque password credential (bcrypt hash), never exposed to callers
    pub password_hash: String,

    /// Whether the e-mail address has been verified
    pub is_verified: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new unverified Account
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        phone: String,
        account_type: AccountType,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            phone,
            account_type,
            password_hash,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the account as verified (one-way, idempotent)
    pub fn verify(&mut self) {
        self.is_verified = true;
    }
}
