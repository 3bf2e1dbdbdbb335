//! The fixed set of model identifiers the application exposes.

use crate::error_handler::{ConfigError, Result};

/// Models offered by the selector, in display order.
pub const SUPPORTED_MODELS: [&str; 5] = [
    "meta.llama3-70b-instruct-v1:0",
    "us.meta.llama3-2-11b-instruct-v1:0",
    "amazon.nova-micro-v1:0",
    "us.deepseek.r1-v1:0",
    "mistral.mistral-large-2402-v1:0",
];

/// Preselected model.
pub const DEFAULT_MODEL: &str = SUPPORTED_MODELS[0];

/// Checks a model identifier against [`SUPPORTED_MODELS`].
///
/// # Errors
/// Returns [`ConfigError::UnsupportedModel`] for anything outside the
/// catalog.
pub fn validate_model_id(model_id: &str) -> Result<()> {
    if SUPPORTED_MODELS.contains(&model_id) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedModel(model_id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(DEFAULT_MODEL, SUPPORTED_MODELS[0]);
    }

    #[test]
    fn rejects_unknown_model() {
        assert!(validate_model_id("meta.llama3-70b-instruct-v1:0").is_ok());
        assert!(validate_model_id("gpt-4").is_err());
    }
}
