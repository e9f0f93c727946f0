//! Salesforce REST query client
//!
//! This service runs SOQL queries against the REST API, following
//! `nextRecordsUrl` cursors until every page has been read. Each page is
//! retried on transport failures; error statuses from Salesforce are
//! returned immediately.

use std::time::{Duration, Instant};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;
use crate::config::SalesforceConfig;
use crate::models::{AccessToken, QueryPage};
use crate::utils::errors::{SalesforceError, SalesforceResult};
use crate::utils::logging;

/// Client for the Salesforce query endpoint
#[derive(Clone, Debug)]
pub struct SalesforceClient {
    client: Client,
    config: SalesforceConfig,
}

impl SalesforceClient {
    /// Create a new SalesforceClient instance
    pub fn new(client: Client, config: SalesforceConfig) -> Self {
        Self { client, config }
    }

    /// Build the first-page query URL for `soql`
    pub fn query_url(&self, instance_url: &str, soql: &str) -> SalesforceResult<Url> {
        let base = format!(
            "{}/services/data/v{}/query",
            instance_url.trim_end_matches('/'),
            self.config.api_version
        );
        Ok(Url::parse_with_params(&base, &[("q", soql)])?)
    }

    /// Run `soql` and collect the records of every page, in order
    pub async fn query_all<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        soql: &str,
    ) -> SalesforceResult<Vec<T>> {
        let mut records = Vec::new();
        let mut next = Some(self.query_url(&token.instance_url, soql)?);

        while let Some(url) = next {
            let page = self.fetch_page(token, &url).await?;
            info!(batch_size = page.records.len(), "Fetched records in this batch");

            for raw in page.records {
                let record = serde_json::from_value(raw).map_err(SalesforceError::InvalidRecord)?;
                records.push(record);
            }

            next = match page.next_records_url {
                Some(cursor) => {
                    let url = resolve_next_url(&token.instance_url, &cursor)?;
                    info!(url = %url, "Next page URL");
                    Some(url)
                }
                None => {
                    info!("No more records to fetch");
                    None
                }
            };
        }

        info!(total = records.len(), "Total records fetched");
        Ok(records)
    }

    /// Fetch one page, retrying transport and decoding failures
    pub async fn fetch_page(&self, token: &AccessToken, url: &Url) -> SalesforceResult<QueryPage> {
        let max_retries = self.config.max_retries.max(1);
        let delay = Duration::from_secs(self.config.retry_delay_seconds);
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!(url = %url, attempt = attempt, "Fetching URL");

            match self.try_fetch_page(token, url).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_recoverable() => {
                    error!(attempt = attempt, error = %e, "Request error fetching query page");
                    if attempt >= max_retries {
                        return Err(SalesforceError::RetriesExhausted {
                            attempts: max_retries,
                            last_error: e.to_string(),
                        });
                    }
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_fetch_page(&self, token: &AccessToken, url: &Url) -> SalesforceResult<QueryPage> {
        let started = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&token.access_token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        logging::log_api_call("query", url.as_str(), Some(status.as_u16()), started.elapsed().as_millis() as u64);

        if !status.is_success() {
            let body = read_error_body(response, "query").await;
            error!(status = status.as_u16(), response = %body, "Failed to fetch events");
            return Err(SalesforceError::QueryFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<QueryPage>().await?)
    }
}

/// Read the body of an error response, logging when it cannot be read
pub(crate) async fn read_error_body(response: reqwest::Response, api: &str) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(api = api, error = %e, "Failed to read error response body");
            String::new()
        }
    }
}

/// Resolve a `nextRecordsUrl` cursor against the instance URL
///
/// Salesforce returns the cursor as an absolute path; anything else is
/// taken to be a full URL.
pub fn resolve_next_url(instance_url: &str, next: &str) -> SalesforceResult<Url> {
    let resolved = if next.starts_with('/') {
        format!("{}{}", instance_url.trim_end_matches('/'), next)
    } else {
        next.to_string()
    };
    Ok(Url::parse(&resolved)?)
}
