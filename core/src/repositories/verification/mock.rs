//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_code::PendingVerification;
use crate::errors::{DomainError, VerificationError};

use super::trait_::VerificationCodeRepository;

/// Mock pending-verification repository for testing
pub struct MockVerificationCodeRepository {
    pending: Arc<RwLock<HashMap<String, PendingVerification>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            pending: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
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
