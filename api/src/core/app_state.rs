use bedrock_client::{GenerationService, RetrievalService};
use expander::ExpanderConfig;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// The two service clients are constructed once at startup and shared by
/// reference for the process lifetime; handlers hold no other state across
/// requests.
pub struct AppState {
    /// Pipeline configuration (Bedrock connection + optional gate secret).
    pub config: ExpanderConfig,
    /// Knowledge-base retrieval client.
    pub retrieval: RetrievalService,
    /// Model-invocation client.
    pub generation: GenerationService,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let config = ExpanderConfig::from_env()?;
        let retrieval = RetrievalService::new(&config.bedrock)?;
        let generation = GenerationService::new(&config.bedrock)?;

        Ok(Self {
            config,
            retrieval,
            generation,
        })
    }
}
