//! Verification code repository trait for pending-verification persistence.
//!
//! There is at most one live pending verification per e-mail address.
//! `put` atomically replaces any prior record; `delete` is the one-shot
//! consumption performed after a successful match. Implementations must make
//! each operation atomic with respect to the record it touches so that a
//! replace and a consume never interleave into a torn record.

use async_trait::async_trait;

use crate::domain::entities::verification_code::PendingVerification;
use crate::errors::DomainError;

/// Repository trait for PendingVerification persistence operations
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Store a pending verification, atomically overwriting any prior record
    /// for the same e-mail address
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError>;

    /// Fetch the pending verification for an e-mail address, if any
    async fn get(&self, email: &str) -> Result<Option<PendingVerification>, DomainError>;

    /// Remove the pending verification for an e-mail address
    ///
    /// Removing an absent record is a no-op.
    async fn delete(&self, email: &str) -> Result<(), DomainError>;

    /// Atomically increment the failed-attempt counter
    ///
    /// # Returns
    /// * `Ok(attempts)` - The updated counter value
    /// * `Err(VerificationError::NoPendingVerification)` - The record vanished
    ///   (consumed or replaced concurrently)
    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError>;
}
