//! Public API types re-used by external crates (e.g., the HTTP API layer).

use bedrock_client::RetrievedPassage;

/// One user action: expand a one-line requirement with knowledge-base
/// context.
///
/// # Example
/// ```
/// use expander::ExpandInput;
/// let input = ExpandInput {
///     model_id: "meta.llama3-70b-instruct-v1:0".into(),
///     knowledge_base_id: "2BHDRTHLT7".into(),
///     requirement: "Add validation on nominee age".into(),
///     access_code: None,
/// };
/// assert!(!input.requirement.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ExpandInput {
    /// Model identifier, one of the supported catalog entries.
    pub model_id: String,
    /// Knowledge base to query.
    pub knowledge_base_id: String,
    /// The one-line requirement to expand.
    pub requirement: String,
    /// Access code matched against the configured shared secret, if any.
    pub access_code: Option<String>,
}

/// Retrieval-phase output: the ranked passages plus both rendered forms.
#[derive(Clone, Debug)]
pub struct RetrievedContext {
    /// Passages in service ranking order.
    pub passages: Vec<RetrievedPassage>,
    /// Annotated human-readable block (index, score, text, source).
    pub display: String,
    /// Flattened text fed verbatim into the generation prompt.
    pub prompt_context: String,
}

/// Final expansion together with the exact context that produced it.
#[derive(Clone, Debug)]
pub struct ExpandedRequirement {
    /// Model output (or the fallback literal when the model stayed silent).
    pub expanded: String,
    /// The retrieval-phase output the prompt was built from.
    pub context: RetrievedContext,
}
