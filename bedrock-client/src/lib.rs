//! Thin clients for the two managed Bedrock endpoints this application
//! delegates to: knowledge-base retrieval and model invocation.
//!
//! The crate owns:
//! - [`config`] — environment-driven connection settings and the fixed
//!   model catalog,
//! - [`error_handler`] — the unified error taxonomy and env helpers,
//! - [`services`] — the two request/response adapters plus the provider
//!   traits ([`ContextRetriever`], [`TextGenerator`]) that let callers
//!   substitute their own backends.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::bedrock_config::BedrockConfig;
pub use config::model_catalog::{DEFAULT_MODEL, SUPPORTED_MODELS, validate_model_id};
pub use error_handler::{BedrockClientError, ConfigError, ServiceError};
pub use services::generation_service::{GenerationService, NO_RESPONSE_FALLBACK, TEMPERATURE};
pub use services::retrieval_service::{NUMBER_OF_RESULTS, RetrievalService, RetrievedPassage};
pub use services::{ContextRetriever, TextGenerator};
