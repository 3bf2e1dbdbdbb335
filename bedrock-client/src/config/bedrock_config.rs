//! Connection settings for the two Bedrock endpoints, loaded strictly from
//! environment variables.
//!
//! # Environment variables
//!
//! - `AWS_REGION` or `AWS_DEFAULT_REGION` — region for endpoint derivation
//!   (default `us-east-1`)
//! - `AWS_BEARER_TOKEN_BEDROCK` — optional Bedrock API key, sent as a
//!   bearer `Authorization` header when present
//! - `BEDROCK_RETRIEVAL_URL` — optional override for the agent-runtime
//!   (knowledge base) endpoint
//! - `BEDROCK_RUNTIME_URL` — optional override for the model-invocation
//!   endpoint
//! - `BEDROCK_TIMEOUT_SECS` — optional request timeout (u64)

use crate::error_handler::{Result, env_opt, env_opt_u64, validate_http_endpoint};

/// Fallback region when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration shared by both service adapters.
///
/// Built once at process start (via [`BedrockConfig::from_env`]) or
/// constructed explicitly, then passed by reference into the adapters.
///
/// # Examples
///
/// ```
/// use bedrock_client::BedrockConfig;
///
/// let cfg = BedrockConfig {
///     region: "eu-west-1".into(),
///     bearer_token: None,
///     retrieval_endpoint: None,
///     generation_endpoint: None,
///     timeout_secs: Some(30),
/// };
/// assert!(cfg.retrieval_base().contains("eu-west-1"));
/// ```
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    /// Region used to derive the default endpoints.
    pub region: String,

    /// Optional Bedrock API key (bearer token). When absent the request is
    /// sent without an `Authorization` header and authentication is left to
    /// the hosting environment.
    pub bearer_token: Option<String>,

    /// Optional full endpoint override for knowledge-base retrieval.
    pub retrieval_endpoint: Option<String>,

    /// Optional full endpoint override for model invocation.
    pub generation_endpoint: Option<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl BedrockConfig {
    /// Builds the config from environment variables.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`](crate::ConfigError::InvalidFormat)
    ///   if an endpoint override is not an http(s) URL
    /// - [`ConfigError::InvalidNumber`](crate::ConfigError::InvalidNumber)
    ///   if `BEDROCK_TIMEOUT_SECS` is set but not a valid `u64`
    pub fn from_env() -> Result<Self> {
        let region = env_opt("AWS_REGION")
            .or_else(|| env_opt("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let retrieval_endpoint = env_opt("BEDROCK_RETRIEVAL_URL");
        if let Some(url) = &retrieval_endpoint {
            validate_http_endpoint("BEDROCK_RETRIEVAL_URL", url)?;
        }

        let generation_endpoint = env_opt("BEDROCK_RUNTIME_URL");
        if let Some(url) = &generation_endpoint {
            validate_http_endpoint("BEDROCK_RUNTIME_URL", url)?;
        }

        Ok(Self {
            region,
            bearer_token: env_opt("AWS_BEARER_TOKEN_BEDROCK"),
            retrieval_endpoint,
            generation_endpoint,
            timeout_secs: env_opt_u64("BEDROCK_TIMEOUT_SECS")?,
        })
    }

    /// Base URL for the knowledge-base retrieval endpoint.
    ///
    /// Precedence: explicit override, then region-derived default.
    pub fn retrieval_base(&self) -> String {
        match &self.retrieval_endpoint {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-agent-runtime.{}.amazonaws.com", self.region),
        }
    }

    /// Base URL for the model-invocation endpoint.
    pub fn generation_base(&self) -> String {
        match &self.generation_endpoint {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(region: &str) -> BedrockConfig {
        BedrockConfig {
            region: region.into(),
            bearer_token: None,
            retrieval_endpoint: None,
            generation_endpoint: None,
            timeout_secs: None,
        }
    }

    #[test]
    fn derives_endpoints_from_region() {
        let c = cfg("us-east-1");
        assert_eq!(
            c.retrieval_base(),
            "https://bedrock-agent-runtime.us-east-1.amazonaws.com"
        );
        assert_eq!(
            c.generation_base(),
            "https://bedrock-runtime.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn override_wins_and_loses_trailing_slash() {
        let mut c = cfg("us-east-1");
        c.retrieval_endpoint = Some("http://127.0.0.1:9000/".into());
        assert_eq!(c.retrieval_base(), "http://127.0.0.1:9000");
    }
}
