//! Account / verification store configuration

use serde::{Deserialize, Serialize};

/// Persistence driver configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Store driver ("memory" or "mysql")
    pub driver: String,

    /// MySQL connection URL (required when driver is "mysql")
    pub database_url: Option<String>,

    /// Maximum connections in the pool
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            driver: String::from("memory"),
            database_url: None,
            max_connections: 10,
        }
    }
}

impl StoreConfig {
    /// Build configuration from `STORE_DRIVER` / `DATABASE_URL` /
    /// `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            driver: std::env::var("STORE_DRIVER").unwrap_or(defaults.driver),
            database_url: std::env::var("DATABASE_URL").ok(),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
        }
    }
}
