//! Model-invocation adapter.
//!
//! Thin client for the runtime invocation endpoint:
//! - `POST {base}/model/{model_id}/invoke` — synchronous text generation
//!
//! The request body carries exactly two fields (`prompt`, `temperature`);
//! the response is expected to carry a `generation` field. When that field
//! is absent the adapter substitutes [`NO_RESPONSE_FALLBACK`] instead of
//! failing. No retries, no backoff: transport and service faults surface to
//! the caller unmodified.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::bedrock_config::BedrockConfig;
use crate::config::model_catalog::validate_model_id;
use crate::error_handler::{Result, ServiceError, make_snippet};
use crate::services::TextGenerator;
use crate::services::retrieval_service::build_client;

/// Sampling temperature sent with every invocation. Fixed by design.
pub const TEMPERATURE: f32 = 0.3;

/// Substitute answer when the response lacks a `generation` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response from model.";

/// Thin client for the model-invocation endpoint.
pub struct GenerationService {
    client: reqwest::Client,
    url_base: String,
}

impl GenerationService {
    /// Creates a new [`GenerationService`] from the given config.
    ///
    /// # Errors
    /// - [`BedrockClientError::HttpTransport`](crate::BedrockClientError::HttpTransport)
    ///   if the HTTP client cannot be built
    pub fn new(cfg: &BedrockConfig) -> Result<Self> {
        let client = build_client(cfg)?;
        Ok(Self {
            client,
            url_base: cfg.generation_base(),
        })
    }

    /// Runs `prompt` through `model_id` and returns the generated text.
    ///
    /// # Errors
    /// - [`ConfigError::UnsupportedModel`](crate::ConfigError::UnsupportedModel)
    ///   if `model_id` is outside the catalog
    /// - [`ServiceError::HttpStatus`] for non-2xx responses
    /// - [`ServiceError::Decode`] if the JSON cannot be parsed
    /// - [`BedrockClientError::HttpTransport`](crate::BedrockClientError::HttpTransport)
    ///   for client/network failures
    pub async fn generate(&self, model_id: &str, prompt: &str) -> Result<String> {
        validate_model_id(model_id)?;

        let url = format!("{}/model/{}/invoke", self.url_base, model_id);
        let body = InvokeRequest {
            prompt,
            temperature: TEMPERATURE,
        };

        debug!(
            model = %model_id,
            prompt_len = prompt.len(),
            "POST {url}"
        );

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %model_id,
                "invocation endpoint returned non-success status"
            );

            return Err(ServiceError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: InvokeResponse = resp.json().await.map_err(|e| {
            error!(error = %e, %url, "failed to decode invocation response");
            ServiceError::Decode(format!("serde error: {e}; expected `generation`"))
        })?;

        debug!(model = %model_id, "invocation completed");

        Ok(generation_or_fallback(out))
    }
}

impl TextGenerator for GenerationService {
    fn generate<'a>(
        &'a self,
        model_id: &'a str,
        prompt: &'a str,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.generate(model_id, prompt))
    }
}

fn generation_or_fallback(out: InvokeResponse) -> String {
    out.generation
        .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InvokeResponse {
    generation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_exactly_prompt_and_temperature() {
        let body = InvokeRequest {
            prompt: "Expand this.",
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt"], "Expand this.");
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn present_generation_field_is_returned() {
        let out: InvokeResponse =
            serde_json::from_str(r#"{ "generation": "Detailed story." }"#).unwrap();
        assert_eq!(generation_or_fallback(out), "Detailed story.");
    }

    #[test]
    fn absent_generation_field_falls_back() {
        let out: InvokeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(generation_or_fallback(out), "No response from model.");
    }
}
