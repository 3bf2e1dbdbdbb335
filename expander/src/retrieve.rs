//! Retrieval-only API: gate, fetch context, format — without generating.
//!
//! This mirrors the first half of `expand_requirement` but stops after
//! formatting, returning both renderings for downstream consumers (the
//! HTTP layer shows `display` and threads `prompt_context` into the
//! generation phase).

use bedrock_client::ContextRetriever;
use tracing::debug;

use crate::api_types::RetrievedContext;
use crate::cfg::ExpanderConfig;
use crate::error::ExpanderError;
use crate::format::format_context;

/// Gate, retrieve the ranked passages, and render both context forms.
///
/// # Errors
/// [`ExpanderError::Unauthorized`] on a gate mismatch (in which case no
/// network call is made); otherwise propagates retrieval faults unmodified.
pub async fn retrieve_context(
    cfg: &ExpanderConfig,
    retriever: &dyn ContextRetriever,
    knowledge_base_id: &str,
    requirement: &str,
    access_code: Option<&str>,
) -> Result<RetrievedContext, ExpanderError> {
    cfg.gate().verify(access_code)?;

    debug!(knowledge_base_id = %knowledge_base_id, "retrieving context");
    let passages = retriever.retrieve(knowledge_base_id, requirement).await?;
    debug!(hits = passages.len(), "context retrieved");

    let formatted = format_context(requirement, &passages);

    Ok(RetrievedContext {
        passages,
        display: formatted.display,
        prompt_context: formatted.prompt_context,
    })
}
