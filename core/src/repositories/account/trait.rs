//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and keyed by the normalized (lowercase) e-mail
//! address, which is the unique identity of an account. Implementations must
//! make each operation atomic with respect to the record it touches.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual storage while maintaining the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized e-mail address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered with the given e-mail
    /// * `Err(DomainError)` - Store fault
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Check whether an account exists for the given e-mail address
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(VerificationError::EmailAlreadyRegistered)` - The e-mail is
    ///   taken, including the case where a concurrent create won the race
    /// * `Err(DomainError)` - Store fault
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Atomically mark the account with the given e-mail as verified
    ///
    /// Idempotent: verifying an already-verified account is a no-op.
    ///
    /// # Returns
    /// * `Ok(())` - Account is verified (possibly already was)
    /// * `Err(VerificationError::AccountNotFound)` - No such account
    /// * `Err(DomainError)` - Store fault
    async fn set_verified(&self, email: &str) -> Result<(), DomainError>;
}
