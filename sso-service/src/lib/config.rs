use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub env: Env,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

/// Deployment environment; selects the log format and default level.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    Local,
    Dev,
    Prod,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub grpc_port: u16,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token_ttl_seconds: u64,
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SSO_DATABASE__URL, SSO_AUTH__TOKEN_TTL_SECONDS, etc.)
    /// 2. Environment-specific config file ({CONFIG_DIR}/{RUN_MODE}.toml)
    /// 3. Default config file ({CONFIG_DIR}/default.toml)
    ///
    /// `CONFIG_DIR` defaults to `config`, `RUN_MODE` to `local`.
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "local".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Example: SSO_DATABASE__URL=sqlite://... overrides database.url
            .add_source(
                Environment::with_prefix("SSO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_ttl_seconds == 0 {
            return Err(ConfigError::Message(
                "auth.token_ttl_seconds must be positive".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "database.max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
