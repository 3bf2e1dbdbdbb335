use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bedrock_client::{BedrockClientError, ConfigError};
use expander::ExpanderError;
use thiserror::Error;

use crate::core::http::response_envelope::ApiResponse;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("configuration error: {0}")]
    Config(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid access code")]
    Unauthorized,

    /// Fault reported by (or while reaching) a managed endpoint.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
        }
    }
}

impl From<ExpanderError> for AppError {
    fn from(err: ExpanderError) -> Self {
        match err {
            ExpanderError::Unauthorized => AppError::Unauthorized,
            ExpanderError::Bedrock(e) => e.into(),
        }
    }
}

impl From<BedrockClientError> for AppError {
    fn from(err: BedrockClientError) -> Self {
        match err {
            BedrockClientError::Config(ConfigError::UnsupportedModel(m)) => {
                AppError::BadRequest(format!("unsupported model id: {m}"))
            }
            BedrockClientError::Config(e) => AppError::Config(e.to_string()),
            BedrockClientError::Service(e) => AppError::Upstream(e.to_string()),
            BedrockClientError::HttpTransport(e) => AppError::Upstream(e.to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let resp: ApiResponse<()> = ApiResponse::error(self.error_code(), self.to_string());
        resp.into_response_with_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_failure_maps_to_401() {
        let err = AppError::from(ExpanderError::Unauthorized);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn unsupported_model_maps_to_400() {
        let err = AppError::from(BedrockClientError::from(ConfigError::UnsupportedModel(
            "gpt-4".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
