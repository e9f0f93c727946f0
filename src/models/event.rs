//! Event model

use serde::{Deserialize, Serialize};

/// Related object reference carried on a Salesforce record (`Owner`, `What`, ...)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelatedName {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Raw `Event` record as returned by the Salesforce query endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "OwnerId", default)]
    pub owner_id: Option<String>,
    #[serde(rename = "Owner", default)]
    pub owner: Option<RelatedName>,
    #[serde(rename = "WhatId", default)]
    pub what_id: Option<String>,
    #[serde(rename = "What", default)]
    pub what: Option<RelatedName>,
    #[serde(rename = "AccountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "Account", default)]
    pub account: Option<RelatedName>,
    #[serde(rename = "Appointment_Status__c", default)]
    pub appointment_status: Option<String>,
    #[serde(rename = "StartDateTime", default)]
    pub start_datetime: Option<String>,
    #[serde(rename = "EndDateTime", default)]
    pub end_datetime: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "CreatedById", default)]
    pub created_by_id: Option<String>,
    #[serde(rename = "CreatedBy", default)]
    pub created_by: Option<RelatedName>,
    #[serde(rename = "LastModifiedById", default)]
    pub last_modified_by_id: Option<String>,
    #[serde(rename = "LastModifiedBy", default)]
    pub last_modified_by: Option<RelatedName>,
}

/// Flattened event returned by `GET /events/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOut {
    pub id: String,
    pub subject: Option<String>,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub what_id: Option<String>,
    pub what_name: Option<String>,
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    pub appointment_status_c: Option<String>,
    pub start_datetime: Option<String>,
    pub end_datetime: Option<String>,
    pub description: Option<String>,
    pub created_by_name: Option<String>,
    pub created_by_id: Option<String>,
    pub last_modified_by_name: Option<String>,
    pub last_modified_by_id: Option<String>,
}

fn related_name(related: Option<RelatedName>) -> Option<String> {
    related.and_then(|r| r.name)
}

impl From<EventRecord> for EventOut {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id,
            subject: record.subject,
            owner_id: record.owner_id,
            owner_name: related_name(record.owner),
            what_id: record.what_id,
            what_name: related_name(record.what),
            account_id: record.account_id,
            account_name: related_name(record.account),
            appointment_status_c: record.appointment_status,
            start_datetime: record.start_datetime,
            end_datetime: record.end_datetime,
            description: record.description,
            created_by_name: related_name(record.created_by),
            created_by_id: record.created_by_id,
            last_modified_by_name: related_name(record.last_modified_by),
            last_modified_by_id: record.last_modified_by_id,
        }
    }
}
