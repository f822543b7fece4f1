//! Store implementations for accounts and pending verifications
//!
//! The in-memory store is the default runtime driver; the MySQL store is
//! feature-gated behind `mysql`. Both provide per-record atomic operations
//! so a pending-code replace and a consume never interleave.

pub mod memory;

#[cfg(feature = "mysql")]
pub mod mysql;

pub use memory::MemoryStore;

#[cfg(feature = "mysql")]
pub use mysql::{connect, MySqlAccountRepository, MySqlVerificationCodeRepository};
