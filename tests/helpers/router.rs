//! In-process HTTP helpers driving the axum router

#![allow(dead_code)]

use std::sync::Arc;
use axum::{body::Body, http::{Request, StatusCode}, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use sf_event_feed::{build_router, config::Settings, ServiceFactory};
use tower::ServiceExt;

/// Build the application router for the given settings
pub fn test_app(settings: Settings) -> Router {
    let services = ServiceFactory::new(settings).expect("failed to build services");
    build_router(Arc::new(services))
}

/// Send a GET request and return the status with the decoded JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(
        |_| serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    );
    (status, body)
}
