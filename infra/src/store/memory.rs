//! In-memory store implementation
//!
//! Default runtime driver for development and single-node deployments.
//! Accounts and pending verifications are keyed by the normalized e-mail
//! address; each write takes the record map's write lock, which is the
//! per-record mutual exclusion boundary.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use yv_core::domain::entities::account::Account;
use yv_core::domain::entities::verification_code::PendingVerification;
use yv_core::errors::{DomainError, VerificationError};
use yv_core::repositories::{AccountRepository, VerificationCodeRepository};

/// In-memory store backing both repository interfaces
///
/// Holding both record families in one store keeps account state and
/// pending-code state consistent behind a single set of locks.
pub struct MemoryStore {
    accounts: RwLock<HashMap<String, Account>>,
    pending: RwLock<HashMap<String, PendingVerification>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            pending: RwLock::new(HashMap::new()),
        }
    }

    /// Number of accounts currently stored
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Number of pending verifications currently stored
    pub async fn pending_count(&self) -> usize {
        self.pending.read().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.contains_key(email))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.email) {
            return Err(VerificationError::EmailAlreadyRegistered.into());
        }

        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn set_verified(&self, email: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(email) {
            Some(account) => {
                account.verify();
                Ok(())
            }
            None => Err(VerificationError::AccountNotFound.into()),
        }
    }
}

#[async_trait]
impl VerificationCodeRepository for MemoryStore {
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError> {
        let mut records = self.pending.write().await;
        records.insert(pending.email.clone(), pending);
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<PendingVerification>, DomainError> {
        let records = self.pending.read().await;
        Ok(records.get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<(), DomainError> {
        let mut records = self.pending.write().await;
        records.remove(email);
        Ok(())
    }

    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError> {
        let mut records = self.pending.write().await;

        match records.get_mut(email) {
            Some(pending) => {
                pending.attempts += 1;
                Ok(pending.attempts)
            }
            None => Err(VerificationError::NoPendingVerification.into()),
        }
    }
}
