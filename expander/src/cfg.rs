//! Runtime configuration loaded from environment variables.

use bedrock_client::BedrockConfig;

use crate::error::ExpanderError;
use crate::gate::AccessGate;

/// Config bag for the pipeline: Bedrock connection settings plus the
/// optional shared secret guarding the flow.
///
/// Read once at process start; immutable afterwards.
#[derive(Clone, Debug)]
pub struct ExpanderConfig {
    /// Connection settings shared by both service adapters.
    pub bedrock: BedrockConfig,

    /// Shared secret from `APP_PASSWORD`. Absent or empty means the gate
    /// is disabled.
    pub shared_secret: Option<String>,
}

impl ExpanderConfig {
    /// Builds the config from environment variables.
    ///
    /// # Errors
    /// Propagates Bedrock config validation failures.
    pub fn from_env() -> Result<Self, ExpanderError> {
        let bedrock = BedrockConfig::from_env().map_err(ExpanderError::Bedrock)?;
        let shared_secret = std::env::var("APP_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            bedrock,
            shared_secret,
        })
    }

    /// The access gate derived from the configured secret.
    pub fn gate(&self) -> AccessGate<'_> {
        AccessGate::new(self.shared_secret.as_deref())
    }
}
