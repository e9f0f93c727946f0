//! Salesforce OAuth2 authentication service
//!
//! Obtains access tokens with the username-password grant and optionally
//! reuses them for a configured lifetime.

use std::sync::Arc;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::config::SalesforceConfig;
use crate::models::AccessToken;
use crate::utils::errors::{SalesforceError, SalesforceResult};
use crate::utils::logging;
use super::salesforce::read_error_body;

/// Token kept between requests while it is younger than the TTL
#[derive(Debug, Clone)]
struct CachedToken {
    token: AccessToken,
    fetched_at: DateTime<Utc>,
}

/// Authentication service for the Salesforce REST API
#[derive(Clone, Debug)]
pub struct SalesforceAuth {
    client: Client,
    config: SalesforceConfig,
    cache: Arc<RwLock<Option<CachedToken>>>,
}

impl SalesforceAuth {
    /// Create a new SalesforceAuth instance
    pub fn new(client: Client, config: SalesforceConfig) -> Self {
        Self {
            client,
            config,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Whether tokens are reused across requests
    pub fn is_caching(&self) -> bool {
        self.config.token_ttl_seconds > 0
    }

    /// Get a valid access token, reusing a cached one when allowed
    pub async fn access_token(&self) -> SalesforceResult<AccessToken> {
        if self.is_caching() {
            if let Some(cached) = self.cache.read().await.as_ref() {
                let age = Utc::now() - cached.fetched_at;
                if age.num_seconds() < self.config.token_ttl_seconds as i64 {
                    debug!(age_seconds = age.num_seconds(), "Reusing cached Salesforce token");
                    return Ok(cached.token.clone());
                }
            }
        }

        let token = self.fetch_token().await?;

        if self.is_caching() {
            *self.cache.write().await = Some(CachedToken {
                token: token.clone(),
                fetched_at: Utc::now(),
            });
        }

        Ok(token)
    }

    /// Drop the cached token so the next call authenticates again
    pub async fn invalidate(&self) {
        if self.cache.write().await.take().is_some() {
            info!("Invalidated cached Salesforce token");
        }
    }

    /// Request a new token from the OAuth2 endpoint
    pub async fn fetch_token(&self) -> SalesforceResult<AccessToken> {
        let url = self.config.token_url();
        debug!(url = %url, username = %self.config.username, "Requesting Salesforce access token");

        let form = [
            ("grant_type", "password"),
            ("client_id", self.config.consumer_key.as_str()),
            ("client_secret", self.config.consumer_secret.as_str()),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
        ];

        let started = std::time::Instant::now();
        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        logging::log_api_call("oauth2/token", &url, Some(status.as_u16()), started.elapsed().as_millis() as u64);

        if !status.is_success() {
            let body = read_error_body(response, "oauth2/token").await;
            logging::log_api_error("oauth2/token", &body, Some("Authentication failed"));
            return Err(SalesforceError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let token: AccessToken = response.json().await?;
        info!(instance_url = %token.instance_url, "Authenticated with Salesforce");
        Ok(token)
    }
}
