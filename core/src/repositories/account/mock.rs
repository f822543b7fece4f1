//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, VerificationError};

use super::trait_::AccountRepository;

/// Mock account repository for testing
///
/// Accounts are keyed by their normalized e-mail address; the write lock is
/// the per-record mutual exclusion boundary.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::AccountType;

    fn account(email: &str) -> Account {
        Account::new(
            email.to_string(),
            "Ayşe".to_string(),
            "Yıldız".to_string(),
            "5551234567".to_string(),
            AccountType::Buyer,
            "$2b$12$hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        repo.create(account("ayse@example.com")).await.unwrap();

        let found = repo.find_by_email("ayse@example.com").await.unwrap();
        assert!(found.is_some());
        assert!(!found.unwrap().is_verified);
        assert!(repo.exists_by_email("ayse@example.com").await.unwrap());
        assert!(!repo.exists_by_email("other@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected() {
        let repo = MockAccountRepository::new();
        repo.create(account("ayse@example.com")).await.unwrap();

        let result = repo.create(account("ayse@example.com")).await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(
                VerificationError::EmailAlreadyRegistered
            ))
        ));
    }

    #[tokio::test]
    async fn test_set_verified_idempotent() {
        let repo = MockAccountRepository::new();
        repo.create(account("ayse@example.com")).await.unwrap();

        repo.set_verified("ayse@example.com").await.unwrap();
        repo.set_verified("ayse@example.com").await.unwrap();

        let found = repo.find_by_email("ayse@example.com").await.unwrap().unwrap();
        assert!(found.is_verified);
    }

    #[tokio::test]
    async fn test_set_verified_unknown_account() {
        let repo = MockAccountRepository::new();
        let result = repo.set_verified("nobody@example.com").await;
        assert!(matches!(
            result,
            Err(DomainError::Verification(VerificationError::AccountNotFound))
        ));
    }
}
