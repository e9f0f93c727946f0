//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventFeedError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_salesforce_config(&settings.salesforce)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(EventFeedError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(EventFeedError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate Salesforce configuration
fn validate_salesforce_config(config: &super::SalesforceConfig) -> Result<()> {
    let credentials = [
        ("consumer key", &config.consumer_key),
        ("consumer secret", &config.consumer_secret),
        ("username", &config.username),
        ("password", &config.password),
    ];
    for (name, value) in credentials {
        if value.is_empty() {
            return Err(EventFeedError::Config(
                format!("Salesforce {} is required", name)
            ));
        }
    }

    url::Url::parse(&config.login_url).map_err(|e| {
        EventFeedError::Config(format!("Invalid Salesforce login URL '{}': {}", config.login_url, e))
    })?;

    if config.api_version.is_empty() {
        return Err(EventFeedError::Config(
            "Salesforce API version is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(EventFeedError::Config(
            "Salesforce timeout must be greater than 0".to_string()
        ));
    }

    if config.max_retries == 0 {
        return Err(EventFeedError::Config(
            "Salesforce max retries must be at least 1".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventFeedError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventFeedError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(path) = &config.file_path {
        if path.is_empty() {
            return Err(EventFeedError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
