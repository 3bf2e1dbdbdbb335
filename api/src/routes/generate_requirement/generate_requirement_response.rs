use serde::Serialize;

/// Response payload for /generate_requirement.
#[derive(Debug, Serialize)]
pub struct GenerateRequirementResponse {
    /// The expanded requirement (plain text).
    pub expanded: String,
}
