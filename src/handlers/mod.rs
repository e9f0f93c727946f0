//! HTTP handlers module
//!
//! This module wires the REST endpoints into an axum router.

pub mod events;
pub mod health;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::services::ServiceFactory;

/// Shared state handed to every handler
pub type AppState = Arc<ServiceFactory>;

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/events", get(events::get_events))
        .route("/events/", get(events::get_events))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
