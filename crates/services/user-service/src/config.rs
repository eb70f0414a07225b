//! User service configuration.

use std::env;

use common::{env_parse, DatabaseConfig};

/// Default gRPC port of the user service
pub const DEFAULT_PORT: u16 = 50052;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Backing store connection and pool settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(&["USER_SERVICE_DATABASE_URL", "DATABASE_URL"]),
            host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("USER_SERVICE_PORT", DEFAULT_PORT),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}
