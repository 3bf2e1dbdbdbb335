//! Generation-only API: gate, build the prompt, invoke the model.
//!
//! The flattened context comes in from the retrieval phase; nothing is
//! retained between the two phases, so callers pass it back explicitly.

use bedrock_client::TextGenerator;
use tracing::debug;

use crate::cfg::ExpanderConfig;
use crate::error::ExpanderError;
use crate::prompt::build_prompt;

/// Gate, build the fixed-template prompt, and run it through the model.
///
/// # Errors
/// [`ExpanderError::Unauthorized`] on a gate mismatch (no network call is
/// made); otherwise propagates invocation faults unmodified.
pub async fn generate_expansion(
    cfg: &ExpanderConfig,
    generator: &dyn TextGenerator,
    model_id: &str,
    requirement: &str,
    prompt_context: &str,
    access_code: Option<&str>,
) -> Result<String, ExpanderError> {
    cfg.gate().verify(access_code)?;

    let prompt = build_prompt(prompt_context, requirement);
    debug!(model = %model_id, prompt_len = prompt.len(), "invoking model");
    let expanded = generator.generate(model_id, &prompt).await?;

    Ok(expanded)
}
