use serde::Deserialize;

/// Request payload for /generate_requirement.
///
/// `prompt_context` is the flattened blob returned by /retrieve_context;
/// the server retains nothing between the two phases, so the client hands
/// it back.
#[derive(Debug, Deserialize)]
pub struct GenerateRequirementRequest {
    /// Model identifier, one of the supported catalog entries.
    pub model_id: String,
    /// The one-line requirement being expanded.
    pub requirement: String,
    /// Flattened context from the retrieval phase.
    pub prompt_context: String,
    /// Access code, required only when the server has a gate configured.
    #[serde(default)]
    pub access_code: Option<String>,
}
