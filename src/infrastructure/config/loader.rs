use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Storage path cannot be empty")]
    EmptyStoragePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid oracle timeout: {0}. Must be positive")]
    InvalidOracleTimeout(u64),

    #[error("Oracle base_url cannot be empty")]
    EmptyOracleBaseUrl,

    #[error("Credentials cannot be empty")]
    EmptyCredentials,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .synk/config.yaml (project config, created by init)
    /// 3. .synk/local.yaml (local overrides, optional)
    /// 4. Environment variables (SYNK_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".synk/config.yaml"))
            .merge(Yaml::file(".synk/local.yaml"))
            .merge(Env::prefixed("SYNK_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.storage.path.is_empty() {
            return Err(ConfigError::EmptyStoragePath);
        }
        if config.storage.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.storage.max_connections,
            ));
        }

        let level = config.logging.level.to_lowercase();
        if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.oracle.timeout_secs == 0 {
            return Err(ConfigError::InvalidOracleTimeout(config.oracle.timeout_secs));
        }
        if config.oracle.base_url.is_empty() {
            return Err(ConfigError::EmptyOracleBaseUrl);
        }

        if config.credentials.username.is_empty() || config.credentials.password.is_empty() {
            return Err(ConfigError::EmptyCredentials);
        }

        Ok(())
    }
}
