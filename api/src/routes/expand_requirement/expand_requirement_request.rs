use serde::Deserialize;

/// Request payload for /expand_requirement.
#[derive(Debug, Deserialize)]
pub struct ExpandRequirementRequest {
    /// Model identifier, one of the supported catalog entries.
    pub model_id: String,
    /// Knowledge base to query.
    pub knowledge_base_id: String,
    /// The one-line requirement to expand.
    pub requirement: String,
    /// Access code, required only when the server has a gate configured.
    #[serde(default)]
    pub access_code: Option<String>,
}
