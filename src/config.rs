use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_contact::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::{env, time::Duration};

/// Demo key shipped with the site so the form works out of the box.
/// Deployments are expected to override it.
pub const FALLBACK_ACCESS_KEY: &str = "7d3f2c1a-demo-4b6e-9a0f-portfolio00000";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl RelayConfig {
    pub fn uses_fallback_key(&self) -> bool {
        self.access_key == FALLBACK_ACCESS_KEY
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Delay before a settled outcome reverts to idle
    #[serde(default = "default_reset_after_ms")]
    pub reset_after_ms: u64,
    /// Idle time after which a visitor's form state is dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            reset_after_ms: default_reset_after_ms(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl ContactConfig {
    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn default_reset_after_ms() -> u64 {
    3000
}

fn default_session_ttl_secs() -> u64 {
    1800
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. WEB3FORMS_ACCESS_KEY for the relay credential
    /// 2. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("relay.endpoint", DEFAULT_ENDPOINT)?
            .set_default("relay.access_key", FALLBACK_ACCESS_KEY)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(access_key) = env::var("WEB3FORMS_ACCESS_KEY") {
            builder = builder.set_override("relay.access_key", access_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.relay.endpoint.trim().is_empty() {
            return Err("Relay endpoint must not be empty".to_string());
        }
        if self.relay.access_key.trim().is_empty() {
            return Err("Relay access key must not be empty".to_string());
        }
        if self.contact.reset_after_ms == 0 {
            return Err("Contact reset delay must be greater than 0".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}
