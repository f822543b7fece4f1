//! Configuration types for the Yuva server
//!
//! Every config struct can be built from environment variables through a
//! `from_env()` constructor, with sensible defaults for local development.

pub mod delivery;
pub mod server;
pub mod store;

pub use delivery::MailConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
