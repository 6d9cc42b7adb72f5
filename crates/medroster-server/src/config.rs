//! Server configuration from the environment.

use std::env;

/// Special database path selecting an ephemeral in-memory store.
pub const IN_MEMORY: &str = ":memory:";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, `MEDROSTER_ADDR`
    pub addr: String,
    /// SQLite path (or ":memory:"), `MEDROSTER_DB`
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:5000".into(),
            db_path: "medroster.db".into(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: env::var("MEDROSTER_ADDR").unwrap_or(defaults.addr),
            db_path: env::var("MEDROSTER_DB").unwrap_or(defaults.db_path),
        }
    }
}
