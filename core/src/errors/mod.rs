//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{
    extract_english_message, extract_turkish_message, ValidationError, VerificationError,
};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Infrastructure fault from the external store
    #[error("Store unavailable: {message} | Veri deposuna ulaşılamıyor")]
    Store { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message} | Sunucu hatası")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl DomainError {
    /// Stable kind identifier for programmatic handling
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Store { .. } => "STORE_UNAVAILABLE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Validation(e) => e.kind(),
            DomainError::Verification(e) => e.kind(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
