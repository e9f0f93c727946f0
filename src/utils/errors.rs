//! Error handling for the event feed
//!
//! This module defines the main error types used throughout the application
//! and how they are rendered as HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Main error type for the event feed application
#[derive(Error, Debug)]
pub enum EventFeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error(transparent)]
    Salesforce(#[from] SalesforceError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Salesforce API specific errors
#[derive(Error, Debug)]
pub enum SalesforceError {
    #[error("Salesforce authentication failed")]
    AuthenticationFailed { status: u16, body: String },

    #[error("Failed to fetch events from Salesforce: {body}")]
    QueryFailed { status: u16, body: String },

    #[error("Failed after {attempts} retries: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid Salesforce URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid record in Salesforce response: {0}")]
    InvalidRecord(serde_json::Error),
}

/// Result type alias for event feed operations
pub type Result<T> = std::result::Result<T, EventFeedError>;

/// Result type alias for Salesforce operations
pub type SalesforceResult<T> = std::result::Result<T, SalesforceError>;

impl SalesforceError {
    /// Whether another attempt at the same request may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SalesforceError::Request(_))
    }

    /// Upstream HTTP status, when Salesforce answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            SalesforceError::AuthenticationFailed { status, .. }
            | SalesforceError::QueryFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl EventFeedError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventFeedError::Config(_) => false,
            EventFeedError::ConfigLoad(_) => false,
            EventFeedError::Authentication(_) => false,
            EventFeedError::Salesforce(e) => e.is_recoverable(),
            EventFeedError::Http(_) => true,
            EventFeedError::Logging(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventFeedError::Config(_) => ErrorSeverity::Critical,
            EventFeedError::ConfigLoad(_) => ErrorSeverity::Critical,
            EventFeedError::Logging(_) => ErrorSeverity::Critical,
            EventFeedError::Authentication(_) => ErrorSeverity::Warning,
            EventFeedError::Salesforce(SalesforceError::QueryFailed { status, .. }) if *status < 500 => {
                ErrorSeverity::Warning
            }
            _ => ErrorSeverity::Error,
        }
    }

    /// HTTP status returned to API callers
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventFeedError::Authentication(_) => StatusCode::UNAUTHORIZED,
            EventFeedError::Salesforce(SalesforceError::AuthenticationFailed { .. }) => {
                StatusCode::UNAUTHORIZED
            }
            EventFeedError::Salesforce(SalesforceError::QueryFailed { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EventFeedError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.severity() {
            ErrorSeverity::Warning => {
                warn!(status = status.as_u16(), error = %self, "Request failed");
            }
            _ => {
                error!(status = status.as_u16(), error = %self, "Request failed");
            }
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_maps_to_unauthorized() {
        let err = EventFeedError::Authentication("Salesforce authentication failed".to_string());
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Authentication error: Salesforce authentication failed");
    }

    #[test]
    fn test_query_failure_passes_status_through() {
        let err = EventFeedError::from(SalesforceError::QueryFailed {
            status: 400,
            body: "MALFORMED_QUERY".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Failed to fetch events from Salesforce: MALFORMED_QUERY"
        );
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_unrepresentable_status_maps_to_bad_gateway() {
        let err = EventFeedError::from(SalesforceError::QueryFailed {
            status: 1000,
            body: String::new(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_retries_exhausted_is_internal_error() {
        let err = EventFeedError::from(SalesforceError::RetriesExhausted {
            attempts: 3,
            last_error: "connection refused".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed after 3 retries: connection refused");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_upstream_status() {
        let err = SalesforceError::AuthenticationFailed {
            status: 400,
            body: "invalid_grant".to_string(),
        };
        assert_eq!(err.upstream_status(), Some(400));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
        assert_eq!(EventFeedError::Config("x".into()).severity(), ErrorSeverity::Critical);
    }
}
