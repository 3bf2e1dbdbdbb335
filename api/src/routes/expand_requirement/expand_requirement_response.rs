use expander::ExpandedRequirement;
use serde::Serialize;

use crate::routes::retrieve_context::retrieve_context_response::{
    PassageItem, RetrieveContextResponse,
};

/// Response payload for /expand_requirement.
#[derive(Debug, Serialize)]
pub struct ExpandRequirementResponse {
    /// The expanded requirement (plain text).
    pub expanded: String,
    /// The context that produced it, in both renderings.
    pub context: RetrieveContextResponse,
}

impl From<ExpandedRequirement> for ExpandRequirementResponse {
    fn from(out: ExpandedRequirement) -> Self {
        Self {
            expanded: out.expanded,
            context: RetrieveContextResponse {
                display: out.context.display,
                prompt_context: out.context.prompt_context,
                results: out
                    .context
                    .passages
                    .into_iter()
                    .map(|p| PassageItem {
                        score: p.score,
                        source: p.source_uri,
                        text: p.text,
                    })
                    .collect(),
            },
        }
    }
}
