//! POST /generate_requirement — the generation phase: gate, build the
//! fixed prompt around the supplied context, invoke the model.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::AppError,
    routes::generate_requirement::{
        generate_requirement_request::GenerateRequirementRequest,
        generate_requirement_response::GenerateRequirementResponse,
    },
};

pub async fn generate_requirement_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(p): Json<GenerateRequirementRequest>,
) -> Response {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        model = %p.model_id,
        context_len = p.prompt_context.len(),
        "generate_requirement_route: start"
    );

    let result = expander::generate_expansion(
        &state.config,
        &state.generation,
        &p.model_id,
        &p.requirement,
        &p.prompt_context,
        p.access_code.as_deref(),
    )
    .await;

    match result {
        Ok(expanded) => {
            debug!(
                request_id = %request_id,
                model = %p.model_id,
                "generate_requirement_route: success"
            );

            ApiResponse::success(GenerateRequirementResponse { expanded })
                .into_response_with_status(StatusCode::OK)
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                model = %p.model_id,
                error = %err,
                "generate_requirement_route: invocation failed"
            );

            AppError::from(err).into_response()
        }
    }
}
