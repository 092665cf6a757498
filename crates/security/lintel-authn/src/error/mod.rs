//! Error types for the decision engines
//!
//! Per-handler failures are recoverable and never escalate on their own;
//! they are aggregated into the failures map (see
//! [`lintel_core::HandlerError`]). Only the two transaction-level outcomes
//! below escalate to the caller.

use std::collections::HashMap;

use lintel_core::HandlerError;
use thiserror::Error;

/// Result type alias for the decision engines
pub type Result<T> = std::result::Result<T, Error>;

/// Transaction-level errors
#[derive(Error, Debug)]
pub enum Error {
    /// The configured policy rejected the aggregate outcome
    #[error("{errors} errors, {successes} successes")]
    PolicyRejection {
        /// Number of handlers that failed
        errors: usize,
        /// Number of handlers that succeeded
        successes: usize,
        /// Failure causes, keyed by handler name
        failures: HashMap<String, HandlerError>,
    },

    /// A CLOSED-mode multifactor provider could not be reached
    #[error("Multifactor provider {provider_id} is unavailable for service {service_id}")]
    ProviderUnavailable {
        /// Id of the unreachable provider
        provider_id: String,
        /// Service the login was for
        service_id: String,
    },

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether the failure is attributable to the submitted credentials
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, Error::PolicyRejection { .. })
    }

    /// Whether the failure is an infrastructure fault rather than a
    /// credential problem
    pub fn is_infrastructure_failure(&self) -> bool {
        matches!(self, Error::ProviderUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_carries_only_counts() {
        let error = Error::PolicyRejection {
            errors: 2,
            successes: 0,
            failures: HashMap::from([
                ("HandlerA".to_string(), HandlerError::InvalidCredentials),
                ("HandlerB".to_string(), HandlerError::AccountLocked),
            ]),
        };

        assert_eq!(error.to_string(), "2 errors, 0 successes");
    }

    #[test]
    fn provider_unavailability_is_an_infrastructure_failure() {
        let error = Error::ProviderUnavailable {
            provider_id: "mfa-duo".to_string(),
            service_id: "https://app.example.org/".to_string(),
        };

        assert!(error.is_infrastructure_failure());
        assert!(!error.is_credential_failure());
    }

    #[test]
    fn policy_rejection_is_a_credential_failure() {
        let error = Error::PolicyRejection {
            errors: 1,
            successes: 0,
            failures: HashMap::new(),
        };

        assert!(error.is_credential_failure());
        assert!(!error.is_infrastructure_failure());
    }
}
