use serde::Deserialize;

/// Request payload for /retrieve_context.
#[derive(Debug, Deserialize)]
pub struct RetrieveContextRequest {
    /// Knowledge base to query.
    pub knowledge_base_id: String,
    /// The one-line requirement used as the retrieval query.
    pub query: String,
    /// Access code, required only when the server has a gate configured.
    #[serde(default)]
    pub access_code: Option<String>,
}
