//! RAG + LLM requirement expander with a small public surface.
//!
//! Public API: [`expand`] / [`expand_requirement`] run the whole flow —
//! gate, retrieve top-K context from the knowledge base, render the context
//! block, build the fixed prompt, invoke the model — and return the
//! expansion together with the context that produced it.
//! [`retrieve_context`] and [`generate_expansion`] expose the two halves
//! for callers that render between the phases.

mod cfg;
mod error;
mod format;
mod gate;
mod generate;
mod progress;
mod prompt;
mod retrieve;

mod api_types;

pub use api_types::{ExpandInput, ExpandedRequirement, RetrievedContext};

pub use cfg::ExpanderConfig;
pub use error::ExpanderError;
pub use format::{FormattedContext, format_context};
pub use gate::AccessGate;
pub use generate::generate_expansion;
pub use progress::{IndicatifProgress, NoopProgress, Progress};
pub use prompt::build_prompt;
pub use retrieve::retrieve_context;

use bedrock_client::{ContextRetriever, GenerationService, RetrievalService, TextGenerator};

/// Expand a requirement using configuration and clients built from the
/// environment, reporting progress on a TTY spinner.
///
/// This is a convenience wrapper over [`expand_requirement`].
///
/// # Example
/// ```no_run
/// # use expander::{ExpandInput, expand};
/// # #[tokio::main] async fn main() {
/// let input = ExpandInput {
///     model_id: "meta.llama3-70b-instruct-v1:0".into(),
///     knowledge_base_id: "2BHDRTHLT7".into(),
///     requirement: "Add validation on nominee age".into(),
///     access_code: None,
/// };
/// let out = expand(&input).await.unwrap();
/// println!("{}", out.expanded);
/// # }
/// ```
pub async fn expand(input: &ExpandInput) -> Result<ExpandedRequirement, ExpanderError> {
    let cfg = ExpanderConfig::from_env()?;
    let retrieval = RetrievalService::new(&cfg.bedrock).map_err(ExpanderError::Bedrock)?;
    let generation = GenerationService::new(&cfg.bedrock).map_err(ExpanderError::Bedrock)?;
    let prog = IndicatifProgress::spinner();

    expand_requirement(&cfg, &retrieval, &generation, input, &prog).await
}

/// Run the full five-step pipeline with explicit dependencies.
///
/// Steps: gate → retrieve → format → build prompt → generate. Strictly
/// sequential; a failure at any step aborts the run and nothing is
/// retried.
///
/// # Errors
/// - [`ExpanderError::Unauthorized`] on a gate mismatch — the two provider
///   dependencies are never touched in that case
/// - retrieval/invocation faults propagate unmodified
pub async fn expand_requirement(
    cfg: &ExpanderConfig,
    retriever: &dyn ContextRetriever,
    generator: &dyn TextGenerator,
    input: &ExpandInput,
    prog: &dyn Progress,
) -> Result<ExpandedRequirement, ExpanderError> {
    // 1) Gate before anything leaves the process.
    cfg.gate().verify(input.access_code.as_deref())?;

    // 2) Retrieve + 3) format.
    prog.step("Retrieving context from knowledge base...");
    let context = retrieve_context(
        cfg,
        retriever,
        &input.knowledge_base_id,
        &input.requirement,
        input.access_code.as_deref(),
    )
    .await?;

    // 4) Prompt + 5) invoke.
    prog.step(&format!("Invoking model: {}", input.model_id));
    let expanded = generate_expansion(
        cfg,
        generator,
        &input.model_id,
        &input.requirement,
        &context.prompt_context,
        input.access_code.as_deref(),
    )
    .await?;

    prog.finish("done");

    Ok(ExpandedRequirement { expanded, context })
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bedrock_client::{BedrockClientError, BedrockConfig, RetrievedPassage};

    use super::*;

    fn test_cfg(secret: Option<&str>) -> ExpanderConfig {
        ExpanderConfig {
            bedrock: BedrockConfig {
                region: "us-east-1".into(),
                bearer_token: None,
                retrieval_endpoint: None,
                generation_endpoint: None,
                timeout_secs: None,
            },
            shared_secret: secret.map(str::to_string),
        }
    }

    #[derive(Default)]
    struct MockRetriever {
        calls: AtomicUsize,
        passages: Vec<RetrievedPassage>,
    }

    impl ContextRetriever for MockRetriever {
        fn retrieve<'a>(
            &'a self,
            _knowledge_base_id: &'a str,
            _query_text: &'a str,
        ) -> Pin<
            Box<
                dyn Future<Output = Result<Vec<RetrievedPassage>, BedrockClientError>>
                    + Send
                    + 'a,
            >,
        > {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let passages = self.passages.clone();
            Box::pin(async move { Ok(passages) })
        }
    }

    #[derive(Default)]
    struct MockGenerator {
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl TextGenerator for MockGenerator {
        fn generate<'a>(
            &'a self,
            _model_id: &'a str,
            prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, BedrockClientError>> + Send + 'a>>
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Box::pin(async { Ok("Expanded story.".to_string()) })
        }
    }

    fn input(access_code: Option<&str>) -> ExpandInput {
        ExpandInput {
            model_id: "meta.llama3-70b-instruct-v1:0".into(),
            knowledge_base_id: "2BHDRTHLT7".into(),
            requirement: "Add validation on nominee age".into(),
            access_code: access_code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn gate_mismatch_blocks_before_any_network_call() {
        let cfg = test_cfg(Some("secret123"));
        let retriever = MockRetriever::default();
        let generator = MockGenerator::default();

        let err = expand_requirement(
            &cfg,
            &retriever,
            &generator,
            &input(Some("wrong")),
            &NoopProgress,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ExpanderError::Unauthorized));
        assert_eq!(retriever.calls.load(Ordering::SeqCst), 0);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn gate_match_runs_the_pipeline() {
        let cfg = test_cfg(Some("secret123"));
        let retriever = MockRetriever::default();
        let generator = MockGenerator::default();

        let out = expand_requirement(
            &cfg,
            &retriever,
            &generator,
            &input(Some("secret123")),
            &NoopProgress,
        )
        .await
        .unwrap();

        assert_eq!(out.expanded, "Expanded story.");
        assert_eq!(retriever.calls.load(Ordering::SeqCst), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn end_to_end_scenario_renders_context_and_prompt() {
        let cfg = test_cfg(None);
        let retriever = MockRetriever {
            calls: AtomicUsize::new(0),
            passages: vec![
                RetrievedPassage {
                    text: "Nominees must be natural persons.".into(),
                    source_uri: "s3://kb/policy.txt".into(),
                    score: 0.91,
                },
                RetrievedPassage {
                    text: "Minors require a guardian.".into(),
                    source_uri: "s3://kb/guardian.txt".into(),
                    score: 0.77,
                },
            ],
        };
        let generator = MockGenerator::default();

        let out = expand_requirement(&cfg, &retriever, &generator, &input(None), &NoopProgress)
            .await
            .unwrap();

        // Both entries appear, labeled and scored, in ranking order.
        assert!(out.context.display.contains("[1] Score: 0.91"));
        assert!(out.context.display.contains("[2] Score: 0.77"));
        assert_eq!(
            out.context.prompt_context,
            "Nominees must be natural persons.Minors require a guardian."
        );

        // The prompt carries the requirement exactly once, as the labeled
        // Requirement value.
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert_eq!(prompt.matches("Add validation on nominee age").count(), 1);
        assert!(prompt.contains("Requirement:\nAdd validation on nominee age"));
        assert!(prompt.contains(&out.context.prompt_context));
    }

    #[tokio::test]
    async fn retrieval_only_half_skips_the_generator() {
        let cfg = test_cfg(None);
        let retriever = MockRetriever::default();

        let ctx = retrieve_context(&cfg, &retriever, "2BHDRTHLT7", "query", None)
            .await
            .unwrap();

        assert!(ctx.passages.is_empty());
        assert!(ctx.display.starts_with("User query: query"));
        assert_eq!(retriever.calls.load(Ordering::SeqCst), 1);
    }
}
