//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from defaults, TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Environment prefix for structured overrides, e.g. `EVENTS_API_SERVER__PORT`
pub const ENV_PREFIX: &str = "EVENTS_API";

/// Plain credential variables that take precedence over every other source
/// when set to a non-empty value
const LEGACY_CREDENTIAL_VARS: [(&str, &str); 4] = [
    ("salesforce.consumer_key", "SALESFORCE_CONSUMER_KEY"),
    ("salesforce.consumer_secret", "SALESFORCE_CONSUMER_SECRET"),
    ("salesforce.username", "SALESFORCE_USERNAME"),
    ("salesforce.password", "SALESFORCE_PASSWORD"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub salesforce: SalesforceConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Salesforce connected app and REST API configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct SalesforceConfig {
    pub login_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub username: String,
    pub password: String,
    pub api_version: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub token_ttl_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from `config.*` in the working directory and the environment
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load("config")
    }

    /// Load settings using the given config file base name
    pub fn load(file_name: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        for (key, var) in LEGACY_CREDENTIAL_VARS {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventFeedError> {
        super::validation::validate_settings(self)
    }
}

impl ServerConfig {
    /// Socket address string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SalesforceConfig {
    /// Whether every credential of the password grant is present
    pub fn has_credentials(&self) -> bool {
        [&self.consumer_key, &self.consumer_secret, &self.username, &self.password]
            .iter()
            .all(|value| !value.is_empty())
    }

    /// OAuth2 token endpoint derived from the login URL
    pub fn token_url(&self) -> String {
        format!("{}/services/oauth2/token", self.login_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for SalesforceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceConfig")
            .field("login_url", &self.login_url)
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_seconds", &self.retry_delay_seconds)
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            salesforce: SalesforceConfig {
                login_url: "https://login.salesforce.com".to_string(),
                consumer_key: String::new(),
                consumer_secret: String::new(),
                username: String::new(),
                password: String::new(),
                api_version: "59.0".to_string(),
                timeout_seconds: 30,
                max_retries: 3,
                retry_delay_seconds: 2,
                token_ttl_seconds: 0,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
