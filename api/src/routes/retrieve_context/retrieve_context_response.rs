use expander::RetrievedContext;
use serde::Serialize;

/// Response payload for /retrieve_context.
#[derive(Debug, Serialize)]
pub struct RetrieveContextResponse {
    /// Annotated context block for display.
    pub display: String,
    /// Flattened context the client passes back into the generation phase.
    pub prompt_context: String,
    /// The individual ranked passages.
    pub results: Vec<PassageItem>,
}

/// Small context passage descriptor.
#[derive(Debug, Serialize)]
pub struct PassageItem {
    pub score: f32,
    pub source: String,
    pub text: String,
}

impl From<RetrievedContext> for RetrieveContextResponse {
    fn from(ctx: RetrievedContext) -> Self {
        Self {
            display: ctx.display,
            prompt_context: ctx.prompt_context,
            results: ctx
                .passages
                .into_iter()
                .map(|p| PassageItem {
                    score: p.score,
                    source: p.source_uri,
                    text: p.text,
                })
                .collect(),
        }
    }
}
