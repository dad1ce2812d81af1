use serde::{Deserialize, Serialize};

/// Main configuration structure for Synk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Durable storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Generative-AI oracle configuration
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fixed shared-secret credential pair
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            oracle: OracleConfig::default(),
            logging: LoggingConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

/// Durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StorageConfig {
    /// Path to the `SQLite` state database
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_storage_path() -> String {
    ".synk/synk.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Generative-AI oracle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OracleConfig {
    /// API key; falls back to the GEMINI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL
    #[serde(default = "default_oracle_base_url")]
    pub base_url: String,

    /// Default model
    #[serde(default = "default_oracle_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_oracle_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_oracle_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_oracle_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_oracle_timeout_secs() -> u64 {
    60
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_oracle_base_url(),
            model: default_oracle_model(),
            timeout_secs: default_oracle_timeout_secs(),
        }
    }
}

impl OracleConfig {
    /// Get the API key from config or environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional directory for JSON-formatted daily log files
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Fixed shared-secret credential pair.
///
/// A placeholder authentication gate compared exactly, held in memory for
/// the process lifetime; not a pattern to extend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    "synk28h".to_string()
}

fn default_password() -> String {
    "lima2025".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl CredentialsConfig {
    /// Exact comparison against the fixed pair.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.path, ".synk/synk.db");
        assert_eq!(config.oracle.model, "gemini-2.5-flash");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_credential_check_is_exact() {
        let creds = CredentialsConfig::default();
        assert!(creds.matches("synk28h", "lima2025"));
        assert!(!creds.matches("synk28h", "LIMA2025"));
        assert!(!creds.matches("", ""));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("oracle:\n  model: gemini-2.0-flash\n").unwrap();
        assert_eq!(config.oracle.model, "gemini-2.0-flash");
        assert_eq!(config.storage.path, ".synk/synk.db");
    }
}
