//! Event listing service

use tracing::{info, warn};
use crate::models::{EventOut, EventRecord};
use crate::utils::errors::{EventFeedError, Result};
use super::auth::SalesforceAuth;
use super::salesforce::SalesforceClient;

/// SOQL selecting every `Event` with the names of its related records
pub const EVENT_QUERY: &str = "SELECT Id, Subject, OwnerId, WhatId, AccountId, \
    Appointment_Status__c, StartDateTime, EndDateTime, Description, \
    CreatedById, LastModifiedById, \
    Owner.Name, What.Name, Account.Name, CreatedBy.Name, LastModifiedBy.Name \
    FROM Event";

#[derive(Clone, Debug)]
pub struct EventService {
    auth: SalesforceAuth,
    client: SalesforceClient,
}

impl EventService {
    pub fn new(auth: SalesforceAuth, client: SalesforceClient) -> Self {
        Self { auth, client }
    }

    /// Fetch every event from Salesforce as flat `EventOut` items
    pub async fn list_events(&self) -> Result<Vec<EventOut>> {
        let records = match self.query_events().await {
            Err(EventFeedError::Salesforce(e))
                if e.upstream_status() == Some(401) && self.auth.is_caching() =>
            {
                // Cached token was revoked or expired early
                warn!(error = %e, "Salesforce rejected cached token, re-authenticating");
                self.auth.invalidate().await;
                self.query_events().await?
            }
            other => other?,
        };

        let events: Vec<EventOut> = records.into_iter().map(EventOut::from).collect();
        info!(total = events.len(), "Total events fetched");
        Ok(events)
    }

    async fn query_events(&self) -> Result<Vec<EventRecord>> {
        let token = self
            .auth
            .access_token()
            .await
            .map_err(|e| EventFeedError::Authentication(e.to_string()))?;

        Ok(self.client.query_all::<EventRecord>(&token, EVENT_QUERY).await?)
    }
}
