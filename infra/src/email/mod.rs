//! E-mail Delivery Module
//!
//! This module provides e-mail service implementations for delivering
//! verification codes. It includes a mock implementation for development
//! and a production implementation backed by the Resend HTTP API.
//!
//! ## Features
//!
//! - **Mock Implementation**: Console output for development
//! - **Resend Support**: Production delivery via the Resend API
//! - **Security**: E-mail address masking in logs

pub mod mock_email;

// Resend e-mail service (feature-gated)
#[cfg(feature = "resend-email")]
pub mod resend;

// Re-export commonly used types
pub use mock_email::MockEmailService;

#[cfg(feature = "resend-email")]
pub use resend::{ResendConfig, ResendEmailService};
