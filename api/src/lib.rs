use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
pub use crate::error_handler::AppError;

/// Build the application state from the environment and serve the HTTP
/// surface until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    let addr = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

    let app = Router::new()
        .route("/", get(routes::index_route::index_page))
        .route("/health", get(routes::health_route::health_route))
        .route(
            "/retrieve_context",
            post(routes::retrieve_context::retrieve_context_route::retrieve_context_route),
        )
        .route(
            "/generate_requirement",
            post(routes::generate_requirement::generate_requirement_route::generate_requirement_route),
        )
        .route(
            "/expand_requirement",
            post(routes::expand_requirement::expand_requirement_route::expand_requirement_route),
        )
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;

    info!(%addr, "requirement expander listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
