//! Knowledge-base retrieval adapter.
//!
//! Thin client for the agent-runtime retrieval endpoint:
//! - `POST {base}/knowledgebases/{id}/retrieve` — top-K passages under
//!   vector-similarity search
//!
//! The adapter performs no retries and applies no local re-ranking: passages
//! come back in the order the service ranked them. Missing response fields
//! degrade gracefully (absent text → empty string, absent location →
//! `"Unknown"`, absent score → `0.0`).

use std::time::Duration;

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::bedrock_config::BedrockConfig;
use crate::error_handler::{Result, ServiceError, make_snippet};
use crate::services::ContextRetriever;

/// Number of matches requested per query. Fixed by design.
pub const NUMBER_OF_RESULTS: u32 = 10;

/// One ranked passage as consumed by the rest of the application.
#[derive(Debug, Clone)]
pub struct RetrievedPassage {
    /// Passage text, trimmed. Empty when the service omitted it.
    pub text: String,
    /// Provenance URI, `"Unknown"` when the service omitted it.
    pub source_uri: String,
    /// Similarity score as ranked by the service, `0.0` when omitted.
    pub score: f32,
}

/// Thin client for the knowledge-base retrieval endpoint.
///
/// Keeps a preconfigured `reqwest::Client` (timeout, default headers,
/// optional bearer auth). Construct once and share by reference.
pub struct RetrievalService {
    client: reqwest::Client,
    url_base: String,
}

impl RetrievalService {
    /// Creates a new [`RetrievalService`] from the given config.
    ///
    /// # Errors
    /// - [`BedrockClientError::HttpTransport`](crate::BedrockClientError::HttpTransport)
    ///   if the HTTP client cannot be built
    pub fn new(cfg: &BedrockConfig) -> Result<Self> {
        let client = build_client(cfg)?;
        Ok(Self {
            client,
            url_base: cfg.retrieval_base(),
        })
    }

    /// Retrieves the top [`NUMBER_OF_RESULTS`] passages for `query_text`.
    ///
    /// # Errors
    /// - [`ServiceError::HttpStatus`] for non-2xx responses
    /// - [`ServiceError::Decode`] if the JSON cannot be parsed
    /// - [`BedrockClientError::HttpTransport`](crate::BedrockClientError::HttpTransport)
    ///   for client/network failures
    pub async fn retrieve(
        &self,
        knowledge_base_id: &str,
        query_text: &str,
    ) -> Result<Vec<RetrievedPassage>> {
        let url = format!("{}/knowledgebases/{}/retrieve", self.url_base, knowledge_base_id);
        let body = RetrieveRequest {
            retrieval_query: RetrievalQueryBody { text: query_text },
            retrieval_configuration: RetrievalConfiguration {
                vector_search_configuration: VectorSearchConfiguration {
                    number_of_results: NUMBER_OF_RESULTS,
                },
            },
        };

        debug!(
            knowledge_base_id = %knowledge_base_id,
            query_len = query_text.len(),
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
                knowledge_base_id = %knowledge_base_id,
                "retrieval endpoint returned non-success status"
            );

            return Err(ServiceError::HttpStatus {
                status,
                url,
                snippet,
            }
            .into());
        }

        let out: RetrieveResponse = resp.json().await.map_err(|e| {
            error!(error = %e, %url, "failed to decode retrieval response");
            ServiceError::Decode(format!("serde error: {e}; expected `retrievalResults`"))
        })?;

        debug!(hits = out.retrieval_results.len(), "retrieval completed");

        Ok(out
            .retrieval_results
            .into_iter()
            .map(RetrievedPassage::from)
            .collect())
    }
}

impl ContextRetriever for RetrievalService {
    fn retrieve<'a>(
        &'a self,
        knowledge_base_id: &'a str,
        query_text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<RetrievedPassage>>> + Send + 'a>,
    > {
        Box::pin(self.retrieve(knowledge_base_id, query_text))
    }
}

/// Builds the HTTP client shared by both adapters: timeout, JSON accept
/// header, optional bearer auth.
pub(crate) fn build_client(cfg: &BedrockConfig) -> Result<reqwest::Client> {
    let timeout = cfg
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(60));

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    if let Some(token) = &cfg.bearer_token {
        let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ServiceError::Decode(format!("invalid bearer token header: {e}")))?;
        headers.insert(header::AUTHORIZATION, value);
    }

    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()?)
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrieveRequest<'a> {
    retrieval_query: RetrievalQueryBody<'a>,
    retrieval_configuration: RetrievalConfiguration,
}

#[derive(Debug, Serialize)]
struct RetrievalQueryBody<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfiguration {
    vector_search_configuration: VectorSearchConfiguration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorSearchConfiguration {
    number_of_results: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RetrieveResponse {
    retrieval_results: Vec<RetrievalResultEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RetrievalResultEntry {
    content: PassageContent,
    location: PassageLocation,
    score: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PassageContent {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PassageLocation {
    s3_location: S3Location,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct S3Location {
    uri: Option<String>,
}

impl From<RetrievalResultEntry> for RetrievedPassage {
    fn from(entry: RetrievalResultEntry) -> Self {
        Self {
            text: entry.content.text.trim().to_string(),
            source_uri: entry
                .location
                .s3_location
                .uri
                .unwrap_or_else(|| "Unknown".to_string()),
            score: entry.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_contract() {
        let body = RetrieveRequest {
            retrieval_query: RetrievalQueryBody { text: "nominee age" },
            retrieval_configuration: RetrievalConfiguration {
                vector_search_configuration: VectorSearchConfiguration {
                    number_of_results: NUMBER_OF_RESULTS,
                },
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["retrievalQuery"]["text"], "nominee age");
        assert_eq!(
            json["retrievalConfiguration"]["vectorSearchConfiguration"]["numberOfResults"],
            10
        );
    }

    #[test]
    fn full_entry_maps_through() {
        let raw = r#"{
            "retrievalResults": [
                {
                    "content": { "text": "  Nominees must be adults.  " },
                    "location": { "s3Location": { "uri": "s3://kb/doc1.txt" } },
                    "score": 0.91
                }
            ]
        }"#;
        let out: RetrieveResponse = serde_json::from_str(raw).unwrap();
        let passages: Vec<RetrievedPassage> =
            out.retrieval_results.into_iter().map(Into::into).collect();
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].text, "Nominees must be adults.");
        assert_eq!(passages[0].source_uri, "s3://kb/doc1.txt");
        assert!((passages[0].score - 0.91).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_fields_degrade_gracefully() {
        let raw = r#"{ "retrievalResults": [ {} ] }"#;
        let out: RetrieveResponse = serde_json::from_str(raw).unwrap();
        let p = RetrievedPassage::from(out.retrieval_results.into_iter().next().unwrap());
        assert_eq!(p.text, "");
        assert_eq!(p.source_uri, "Unknown");
        assert_eq!(p.score, 0.0);
    }

    #[test]
    fn empty_response_yields_no_passages() {
        let out: RetrieveResponse = serde_json::from_str("{}").unwrap();
        assert!(out.retrieval_results.is_empty());
    }
}
