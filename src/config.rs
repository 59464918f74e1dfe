//! Configuration module for the print queue API.
//!
//! Loads configuration from YAML files and environment variables.

use std::fmt;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix the printing routes are mounted under (e.g. `/impressao`).
    pub path_prefix: String,
}

/// Authentication configuration.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret expected as `Authorization: Bearer <api_key>`.
    #[serde(default)]
    pub api_key: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Case store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Seed the in-memory store with the sample case.
    pub seed_sample: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for log shipping.
    #[default]
    Json,
    /// Human-readable lines for local runs.
    Pretty,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `API_KEY` environment variable (the shared secret)
    /// 2. Environment variables (PRINTQ__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml (if exists)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_api_key(std::env::var("API_KEY").ok())
    }

    fn load_with_api_key(api_key: Option<String>) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.path_prefix", "/impressao")?
            .set_default("store.seed_sample", true)?
            .set_default("logging.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("PRINTQ")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.api_key", api_key)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "API_KEY is not set; refusing to start without a shared secret".to_string(),
            ));
        }

        let prefix = &self.server.path_prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            return Err(ConfigError::Message(format!(
                "server.path_prefix must start with '/' and must not end with '/' (got '{prefix}')"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(api_key: &str, path_prefix: &str) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                path_prefix: path_prefix.to_string(),
            },
            auth: AuthConfig {
                api_key: api_key.to_string(),
            },
            store: StoreConfig { seed_sample: true },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        assert!(Config::load_with_api_key(None).is_err());
        assert!(Config::load_with_api_key(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_defaults_with_api_key() {
        let config = Config::load_with_api_key(Some("s3cret".to_string())).unwrap();
        assert_eq!(config.auth.api_key, "s3cret");
        assert_eq!(config.server.path_prefix, "/impressao");
        assert_eq!(config.server.port, 5000);
        assert!(config.store.seed_sample);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_names() {
        let format: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, LogFormat::Pretty);
        assert!(serde_json::from_str::<LogFormat>("\"xml\"").is_err());
    }

    #[test]
    fn test_path_prefix_validation() {
        assert!(config_with("k", "/impressao").validate().is_ok());
        assert!(config_with("k", "").validate().is_ok());
        assert!(config_with("k", "impressao").validate().is_err());
        assert!(config_with("k", "/impressao/").validate().is_err());
        assert!(config_with("k", "/").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", config_with("super-secret", "/impressao"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
