//! Mock Salesforce API server for testing
//!
//! This module provides a mock HTTP server that simulates the Salesforce
//! OAuth2 token endpoint and the REST query endpoint. It uses wiremock to
//! create configurable mock responses.

#![allow(dead_code)]

use serde_json::{json, Value};
use sf_event_feed::{config::Settings, services::EVENT_QUERY};
use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_ACCESS_TOKEN: &str = "00Dtest!access-token";
pub const QUERY_PATH: &str = "/services/data/v59.0/query";

/// Mock Salesforce server for testing
pub struct SalesforceMockServer {
    pub server: MockServer,
}

impl SalesforceMockServer {
    /// Create a new mock Salesforce server
    pub async fn new() -> Self {
        // Initialize logging once
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let server = MockServer::start().await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Settings pointing both login and instance at this mock
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.salesforce.login_url = self.uri();
        settings.salesforce.consumer_key = "test-consumer-key".to_string();
        settings.salesforce.consumer_secret = "test-consumer-secret".to_string();
        settings.salesforce.username = "integration@example.com".to_string();
        settings.salesforce.password = "test-password".to_string();
        settings.salesforce.timeout_seconds = 5;
        settings.salesforce.retry_delay_seconds = 0;
        settings
    }

    /// Setup a successful token response whose instance URL is `instance_url`
    pub async fn mock_token_for_instance(&self, instance_url: &str, expected_calls: Option<u64>) {
        let mut mock = Mock::given(method("POST"))
            .and(path("/services/oauth2/token"))
            .and(body_string_contains("grant_type=password"))
            .and(body_string_contains("client_id=test-consumer-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TEST_ACCESS_TOKEN,
                "instance_url": instance_url,
                "id": "https://login.salesforce.com/id/00Dtest/005test",
                "token_type": "Bearer",
                "issued_at": "1709290000000",
                "signature": "c2lnbmF0dXJl"
            })));

        if let Some(calls) = expected_calls {
            mock = mock.expect(calls);
        }

        mock.mount(&self.server).await;
    }

    /// Setup a successful token response pointing at this mock
    pub async fn mock_token_success(&self) {
        self.mock_token_for_instance(&self.uri(), None).await;
    }

    /// Setup a rejected password grant
    pub async fn mock_token_failure(&self) {
        Mock::given(method("POST"))
            .and(path("/services/oauth2/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "authentication failure"
            })))
            .mount(&self.server)
            .await;
    }

    /// Setup the first query page
    pub async fn mock_query_page(&self, records: Vec<Value>, next_records_url: Option<&str>) {
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("q", EVENT_QUERY))
            .and(header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(query_page(records, next_records_url)))
            .mount(&self.server)
            .await;
    }

    /// Setup a follow-up page served at `page_path`
    pub async fn mock_next_page(&self, page_path: &str, records: Vec<Value>, next_records_url: Option<&str>) {
        Mock::given(method("GET"))
            .and(path(page_path))
            .and(header("authorization", format!("Bearer {}", TEST_ACCESS_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(query_page(records, next_records_url)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Setup a query response with an arbitrary template
    ///
    /// `times` limits how often this response is served before later mocks
    /// take over; `expected_calls` is verified when the server drops.
    pub async fn mock_query_response(
        &self,
        response: ResponseTemplate,
        times: Option<u64>,
        expected_calls: Option<u64>,
    ) {
        let mut mock = Mock::given(method("GET")).and(path(QUERY_PATH)).respond_with(response);

        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        if let Some(calls) = expected_calls {
            mock = mock.expect(calls);
        }

        mock.mount(&self.server).await;
    }
}

/// Build a query page body
pub fn query_page(records: Vec<Value>, next_records_url: Option<&str>) -> Value {
    let mut page = json!({
        "totalSize": records.len(),
        "done": next_records_url.is_none(),
        "records": records
    });
    if let Some(next) = next_records_url {
        page["nextRecordsUrl"] = json!(next);
    }
    page
}

/// Build a raw Salesforce `Event` record
pub fn event_record(id: &str, subject: &str) -> Value {
    json!({
        "attributes": {
            "type": "Event",
            "url": format!("/services/data/v59.0/sobjects/Event/{}", id)
        },
        "Id": id,
        "Subject": subject,
        "OwnerId": "005000000000001",
        "Owner": {"attributes": {"type": "Name"}, "Name": "Ada Lovelace"},
        "WhatId": null,
        "What": null,
        "AccountId": "001000000000001",
        "Account": {"attributes": {"type": "Account"}, "Name": "Acme Corp"},
        "Appointment_Status__c": "Scheduled",
        "StartDateTime": "2024-03-01T10:00:00.000+0000",
        "EndDateTime": "2024-03-01T11:00:00.000+0000",
        "Description": null,
        "CreatedById": "005000000000002",
        "CreatedBy": {"Name": "Grace Hopper"},
        "LastModifiedById": "005000000000002",
        "LastModifiedBy": {"Name": "Grace Hopper"}
    })
}
