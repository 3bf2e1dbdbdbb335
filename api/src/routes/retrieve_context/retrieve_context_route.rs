//! POST /retrieve_context — the retrieval phase: gate, query the knowledge
//! base, render both context forms.

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
    routes::retrieve_context::{
        retrieve_context_request::RetrieveContextRequest,
        retrieve_context_response::RetrieveContextResponse,
    },
};

pub async fn retrieve_context_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(p): Json<RetrieveContextRequest>,
) -> Response {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(
        request_id = %request_id,
        knowledge_base_id = %p.knowledge_base_id,
        "retrieve_context_route: start"
    );

    let result = expander::retrieve_context(
        &state.config,
        &state.retrieval,
        &p.knowledge_base_id,
        &p.query,
        p.access_code.as_deref(),
    )
    .await;

    match result {
        Ok(ctx) => {
            debug!(
                request_id = %request_id,
                hits = ctx.passages.len(),
                "retrieve_context_route: success"
            );

            ApiResponse::success(RetrieveContextResponse::from(ctx))
                .into_response_with_status(StatusCode::OK)
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                error = %err,
                "retrieve_context_route: retrieval failed"
            );

            AppError::from(err).into_response()
        }
    }
}
