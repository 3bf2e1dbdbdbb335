//! Shared-secret access gate.
//!
//! The gate is a convenience lock for a demo deployment, not an auth
//! boundary: comparison is plain string equality, there is no hashing and
//! no rate limiting. When no secret is configured the gate is disabled and
//! every request passes.

use crate::error::ExpanderError;

/// Compares a user-supplied access code against the configured secret.
#[derive(Clone, Copy, Debug)]
pub struct AccessGate<'a> {
    secret: Option<&'a str>,
}

impl<'a> AccessGate<'a> {
    /// Builds a gate from an optional secret; empty strings count as
    /// "not configured".
    pub fn new(secret: Option<&'a str>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Whether a secret is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Allows the pipeline to proceed only on an exact match.
    ///
    /// # Errors
    /// [`ExpanderError::Unauthorized`] when a secret is configured and the
    /// provided value does not match it exactly.
    pub fn verify(&self, provided: Option<&str>) -> Result<(), ExpanderError> {
        match self.secret {
            None => Ok(()),
            Some(expected) if provided == Some(expected) => Ok(()),
            Some(_) => Err(ExpanderError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_code_passes() {
        let gate = AccessGate::new(Some("secret123"));
        assert!(gate.verify(Some("secret123")).is_ok());
    }

    #[test]
    fn mismatch_and_absence_are_rejected() {
        let gate = AccessGate::new(Some("secret123"));
        assert!(matches!(
            gate.verify(Some("wrong")),
            Err(ExpanderError::Unauthorized)
        ));
        assert!(gate.verify(None).is_err());
    }

    #[test]
    fn unconfigured_gate_is_skipped() {
        assert!(AccessGate::new(None).verify(None).is_ok());
        assert!(AccessGate::new(Some("")).verify(Some("anything")).is_ok());
        assert!(!AccessGate::new(Some("")).is_enabled());
    }
}
