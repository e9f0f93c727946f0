//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the event feed service.

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventFeedError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| EventFeedError::Logging(e.to_string()))?;

    let (file_writer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "sf-event-feed.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let stdout_plain = (!config.json).then(|| fmt::layer().with_writer(std::io::stdout));
    let stdout_json = config.json.then(|| fmt::layer().json().with_writer(std::io::stdout));
    let file_layer = file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_plain)
        .with(stdout_json)
        .with(file_layer)
        .try_init()
        .map_err(|e| EventFeedError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outbound Salesforce call with its outcome
pub fn log_api_call(api: &str, url: &str, status: Option<u16>, duration_ms: u64) {
    debug!(
        api = api,
        url = url,
        status = status,
        duration_ms = duration_ms,
        "Salesforce API call completed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
