//! MySQL store implementations using SQLx
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE accounts (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     email         VARCHAR(255) NOT NULL UNIQUE,
//!     first_name    VARCHAR(100) NOT NULL,
//!     last_name     VARCHAR(100) NOT NULL,
//!     phone         VARCHAR(32)  NOT NULL,
//!     account_type  VARCHAR(16)  NOT NULL,
//!     password_hash VARCHAR(255) NOT NULL,
//!     is_verified   BOOLEAN      NOT NULL DEFAULT FALSE,
//!     created_at    TIMESTAMP(6) NOT NULL
//! );
//!
//! CREATE TABLE pending_verifications (
//!     email      VARCHAR(255) NOT NULL PRIMARY KEY,
//!     id         CHAR(36)     NOT NULL,
//!     code       CHAR(6)      NOT NULL,
//!     attempts   INT          NOT NULL DEFAULT 0,
//!     issued_at  TIMESTAMP(6) NOT NULL,
//!     expires_at TIMESTAMP(6) NOT NULL
//! );
//! ```

mod account_repository_impl;
mod verification_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use verification_repository_impl::MySqlVerificationCodeRepository;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::InfrastructureError;

/// Create a MySQL connection pool
pub async fn connect(
    database_url: &str,
    max_connections: u32,
) -> Result<MySqlPool, InfrastructureError> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| InfrastructureError::Config(format!("Failed to connect to MySQL: {}", e)))
}
