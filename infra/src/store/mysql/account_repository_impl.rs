//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use yv_core::domain::entities::account::{Account, AccountType};
use yv_core::errors::{DomainError, VerificationError};
use yv_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        let account_type: String = row.try_get("account_type").map_err(|e| {
            DomainError::Internal { message: format!("Failed to get account_type: {}", e) }
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid account UUID: {}", e) })?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            first_name: row.try_get("first_name").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get first_name: {}", e) }
            })?,
            last_name: row.try_get("last_name").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get last_name: {}", e) }
            })?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get phone: {}", e) })?,
            account_type: AccountType::parse(&account_type).ok_or_else(|| {
                DomainError::Internal { message: format!("Unknown account type: {}", account_type) }
            })?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get password_hash: {}", e) }
            })?,
            is_verified: row.try_get("is_verified").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get is_verified: {}", e) }
            })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(|e| {
                DomainError::Internal { message: format!("Failed to get created_at: {}", e) }
            })?,
        })
    }

    /// Whether a database error is a unique-key violation
    fn is_duplicate_key(error: &sqlx::Error) -> bool {
        match error {
            sqlx::Error::Database(db) => db.code().as_deref() == Some("23000"),
            _ => false,
        }
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, first_name, last_name, phone,
                   account_type, password_hash, is_verified, created_at
            FROM accounts
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Store { message: format!("Failed to find account: {}", e) })?;

        row.map(|r| Self::row_to_account(&r)).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM accounts WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to check account existence: {}", e),
            })?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get count: {}", e) })?;

        Ok(count > 0)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, first_name, last_name, phone,
                account_type, password_hash, is_verified, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.phone)
            .bind(account.account_type.as_str())
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(account.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if Self::is_duplicate_key(&e) {
                    VerificationError::EmailAlreadyRegistered.into()
                } else {
                    DomainError::Store { message: format!("Failed to create account: {}", e) }
                }
            })?;

        Ok(account)
    }

    async fn set_verified(&self, email: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE accounts SET is_verified = TRUE WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("Failed to mark account verified: {}", e),
            })?;

        // Zero rows can mean "no account" or "already verified"; only the
        // first case is an error
        if result.rows_affected() == 0 && !self.exists_by_email(email).await? {
            return Err(VerificationError::AccountNotFound.into());
        }

        Ok(())
    }
}
