//! Health endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use super::AppState;

pub async fn health_check(State(services): State<AppState>) -> Json<Value> {
    let status = services.health_check().await;

    Json(json!({
        "status": if status.is_healthy() { "healthy" } else { "degraded" },
        "service": crate::NAME,
        "version": crate::VERSION,
        "issues": status.get_issues(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}
