//! Typed error for the expander crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpanderError {
    /// Access code did not match the configured shared secret.
    #[error("invalid access code")]
    Unauthorized,

    /// Errors from the underlying bedrock-client crate.
    #[error(transparent)]
    Bedrock(#[from] bedrock_client::BedrockClientError),
}
