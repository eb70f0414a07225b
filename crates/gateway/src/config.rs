//! Gateway configuration.

use std::env;

use common::{env_parse, GrpcClientConfig};

/// Default HTTP port of the gateway
pub const DEFAULT_PORT: u16 = 8081;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// User service gRPC connection
    pub user_service: GrpcClientConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origins allowed by CORS (empty = any origin)
    pub cors_origins: Vec<String>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = GrpcClientConfig::default();

        Self {
            user_service: GrpcClientConfig {
                endpoint: env::var("USER_SERVICE_URL").unwrap_or(defaults.endpoint),
                connect_timeout_ms: env_parse(
                    "USER_SERVICE_CONNECT_TIMEOUT_MS",
                    defaults.connect_timeout_ms,
                ),
                request_timeout_ms: env_parse(
                    "USER_SERVICE_TIMEOUT_MS",
                    defaults.request_timeout_ms,
                ),
            },
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("GATEWAY_PORT", DEFAULT_PORT),
            cors_origins: env::var("GATEWAY_CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            user_service: GrpcClientConfig::default(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://localhost:8080, ,http://example.com "),
            vec!["http://localhost:8080", "http://example.com"]
        );
        assert!(parse_origins("").is_empty());
    }
}
