//! Authentication route handlers
//!
//! This module contains the account verification endpoints:
//! - Registration (creates the account and issues the first code)
//! - Resending a verification code
//! - Verifying an e-mail address with a submitted code

pub mod register;
pub mod resend_verification;
pub mod verify_email;

pub use register::AppState;
