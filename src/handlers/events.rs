//! Event feed endpoint

use axum::{extract::State, Json};
use tracing::info;
use crate::models::EventOut;
use crate::utils::errors::Result;
use super::AppState;

/// `GET /events/`: every Salesforce event, flattened
pub async fn get_events(State(services): State<AppState>) -> Result<Json<Vec<EventOut>>> {
    info!("Listing Salesforce events");
    let events = services.event_service.list_events().await?;
    Ok(Json(events))
}
