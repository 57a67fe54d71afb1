//! HTTP request handlers for the web adapter.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::domain::signal::evaluate;

use super::{AppState, WebError};

/// Fetch a snapshot from the configured provider and run the decision
/// pipeline, returning the decision as JSON.
pub async fn get_signal(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, WebError> {
    let snapshot = state.snapshot_port.fetch()?;
    let decision = evaluate(&snapshot, &state.config)?;
    Ok(Json(decision))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not found" })),
    )
}
