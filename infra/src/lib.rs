//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Yuva application,
//! following Clean Architecture principles. It provides concrete
//! implementations for the external interfaces the core depends on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Store**: Account and pending-verification persistence (in-memory
//!   default driver, MySQL via SQLx)
//! - **E-mail**: Outbound verification-code delivery (mock console service,
//!   Resend HTTP API)
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL store implementations (default)
//! - `resend-email`: Enable the Resend e-mail service (default)

use thiserror::Error;

/// E-mail delivery module - Outbound delivery providers
pub mod email;

/// Store module - Account and pending-verification persistence
pub mod store;

/// Errors raised while configuring or talking to external services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("E-mail delivery error: {0}")]
    Email(String),

    #[error("Store error: {0}")]
    Store(String),
}
