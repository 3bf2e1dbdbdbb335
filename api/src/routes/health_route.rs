//! GET /health — liveness probe.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether requests must carry an access code.
    pub gate_enabled: bool,
}

pub async fn health_route(State(state): State<Arc<AppState>>) -> Response {
    ApiResponse::success(HealthResponse {
        status: "ok",
        gate_enabled: state.config.gate().is_enabled(),
    })
    .into_response_with_status(StatusCode::OK)
}
