//! MySQL implementation of the VerificationCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use yv_core::domain::entities::verification_code::PendingVerification;
use yv_core::errors::{DomainError, VerificationError};
use yv_core::repositories::VerificationCodeRepository;

/// MySQL implementation of VerificationCodeRepository
///
/// `pending_verifications` is keyed by e-mail; the upsert in `put` is the
/// atomic replace, the row delete in `delete` is the atomic consume.
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL pending-verification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to PendingVerification entity
    fn row_to_pending(row: &sqlx::mysql::MySqlRow) -> Result<PendingVerification, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        Ok(PendingVerification {
            id: Uuid::parse_str(&id).map_err(|e| {
                DomainError::Internal { message: format!("Invalid verification UUID: {}", e) }
            })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get code: {}", e) })?,
            attempts: row.try_get("attempts").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get attempts: {}", e) }
            })?,
            issued_at: row.try_get::<DateTime<Utc>, _>("issued_at").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get issued_at: {}", e) }
            })?,
            expires_at: row.try_get::<DateTime<Utc>, _>("expires_at").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get expires_at: {}", e) }
            })?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO pending_verifications (
                email, id, code, attempts, issued_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                id = VALUES(id),
                code = VALUES(code),
                attempts = VALUES(attempts),
                issued_at = VALUES(issued_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(&pending.email)
            .bind(pending.id.to_string())
            .bind(&pending.code)
            .bind(pending.attempts)
            .bind(pending.issued_at)
            .bind(pending.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to store pending verification: {}", e),
            })?;

        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<PendingVerification>, DomainError> {
        let query = r#"
            SELECT email, id, code, attempts, issued_at, expires_at
            FROM pending_verifications
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to fetch pending verification: {}", e),
            })?;

        row.map(|r| Self::row_to_pending(&r)).transpose()
    }

    async fn delete(&self, email: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM pending_verifications WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to delete pending verification: {}", e),
            })?;

        Ok(())
    }

    async fn increment_attempts(&self, email: &str) -> Result<i32, DomainError> {
        let result =
            sqlx::query("UPDATE pending_verifications SET attempts = attempts + 1 WHERE email = ?")
                .bind(email)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to increment attempts: {}", e),
                })?;

        if result.rows_affected() == 0 {
            return Err(VerificationError::NoPendingVerification.into());
        }

        let row = sqlx::query("SELECT attempts FROM pending_verifications WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to read attempt count: {}", e),
            })?;

        row.try_get("attempts")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get attempts: {}", e) })
    }
}
