//! Salesforce Event Feed
//!
//! An HTTP service that authenticates against Salesforce with the OAuth2
//! username-password grant, pages through every `Event` record and serves
//! them as a flat JSON list.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventFeedError, SalesforceError, Result};

// Re-export main components for easy access
pub use handlers::build_router;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
