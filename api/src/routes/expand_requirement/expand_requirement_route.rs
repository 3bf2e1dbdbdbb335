//! POST /expand_requirement — the one-shot pipeline for programmatic
//! callers: gate, retrieve, format, build prompt, invoke.
//!
//! ```bash
//! curl -X POST http://127.0.0.1:8080/expand_requirement \
//!   -H 'content-type: application/json' \
//!   -d '{"model_id":"meta.llama3-70b-instruct-v1:0",
//!        "knowledge_base_id":"2BHDRTHLT7",
//!        "requirement":"Add validation on nominee age"}'
//! ```

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use expander::{ExpandInput, NoopProgress};
use tracing::{debug, error};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppError,
    routes::expand_requirement::{
        expand_requirement_request::ExpandRequirementRequest,
        expand_requirement_response::ExpandRequirementResponse,
    },
};

pub async fn expand_requirement_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(p): Json<ExpandRequirementRequest>,
) -> Response {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        model = %p.model_id,
        knowledge_base_id = %p.knowledge_base_id,
        "expand_requirement_route: start"
    );

    let input = ExpandInput {
        model_id: p.model_id,
        knowledge_base_id: p.knowledge_base_id,
        requirement: p.requirement,
        access_code: p.access_code,
    };

    let result = expander::expand_requirement(
        &state.config,
        &state.retrieval,
        &state.generation,
        &input,
        &NoopProgress,
    )
    .await;

    match result {
        Ok(out) => {
            debug!(
                request_id = %request_id,
                hits = out.context.passages.len(),
                "expand_requirement_route: success"
            );

            ApiResponse::success(ExpandRequirementResponse::from(out))
                .into_response_with_status(StatusCode::OK)
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                error = %err,
                "expand_requirement_route: pipeline failed"
            );

            AppError::from(err).into_response()
        }
    }
}
