//! Services module
//!
//! This module contains the Salesforce integration and business logic services

pub mod auth;
pub mod events;
pub mod salesforce;

// Re-export commonly used services
pub use auth::SalesforceAuth;
pub use events::{EventService, EVENT_QUERY};
pub use salesforce::{SalesforceClient, resolve_next_url};

use std::time::Duration;
use reqwest::Client;
use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub settings: Settings,
    pub auth: SalesforceAuth,
    pub event_service: EventService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.salesforce.timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let auth = SalesforceAuth::new(client.clone(), settings.salesforce.clone());
        let salesforce = SalesforceClient::new(client, settings.salesforce.clone());
        let event_service = EventService::new(auth.clone(), salesforce);

        Ok(Self {
            settings,
            auth,
            event_service,
        })
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        ServiceHealthStatus {
            token_caching: self.auth.is_caching(),
            salesforce_configured: self.settings.salesforce.has_credentials(),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub token_caching: bool,
    pub salesforce_configured: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.salesforce_configured
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.salesforce_configured {
            issues.push("Salesforce credentials not configured".to_string());
        }

        issues
    }
}
