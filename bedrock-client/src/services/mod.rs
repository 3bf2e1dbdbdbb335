//! Service adapters for the two managed endpoints, plus the provider traits
//! that decouple the pipeline from the concrete HTTP clients.

use std::{future::Future, pin::Pin};

use crate::error_handler::BedrockClientError;
use crate::services::retrieval_service::RetrievedPassage;

pub mod generation_service;
pub mod retrieval_service;

/// Provider interface for knowledge-base retrieval.
///
/// Async is expressed with boxed futures so the trait stays object-safe;
/// implement it to plug in another retrieval backend (or a mock in tests).
pub trait ContextRetriever: Send + Sync {
    /// Fetches the ranked passages for `query_text` from the given
    /// knowledge base.
    fn retrieve<'a>(
        &'a self,
        knowledge_base_id: &'a str,
        query_text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<RetrievedPassage>, BedrockClientError>> + Send + 'a>>;
}

/// Provider interface for text generation.
pub trait TextGenerator: Send + Sync {
    /// Runs `prompt` through the model identified by `model_id` and returns
    /// the generated continuation.
    fn generate<'a>(
        &'a self,
        model_id: &'a str,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, BedrockClientError>> + Send + 'a>>;
}
