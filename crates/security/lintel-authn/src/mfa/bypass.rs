//! Multifactor bypass evaluation

use lintel_core::{Authentication, RegisteredService};
use regex::Regex;
use tracing::debug;

use super::{anchored_pattern, provider::MultifactorAuthenticationProvider};
use crate::error::{Error, Result};

/// Decides whether a step-up request must be skipped for a provider
///
/// Returning `false` means the request is bypassed: the provider reports
/// itself unsupported and the flow proceeds without the factor.
pub trait MultifactorAuthenticationProviderBypass: Send + Sync {
    /// Whether the request should be honored (not bypassed)
    fn is_authentication_request_honored(
        &self,
        authentication: &Authentication,
        service: Option<&dyn RegisteredService>,
        provider: &MultifactorAuthenticationProvider,
    ) -> bool;
}

/// Bypasses the provider when a principal attribute matches a configured
/// name and value pattern
pub struct PrincipalAttributeBypass {
    attribute_name: String,
    value_pattern: Regex,
}

impl PrincipalAttributeBypass {
    /// Create a bypass over the given attribute name and value pattern
    pub fn new(attribute_name: impl Into<String>, value_pattern: &str) -> Result<Self> {
        let value_pattern = Regex::new(&anchored_pattern(value_pattern)).map_err(|source| {
            Error::Configuration(format!(
                "invalid bypass value pattern '{}': {}",
                value_pattern, source
            ))
        })?;
        Ok(Self {
            attribute_name: attribute_name.into(),
            value_pattern,
        })
    }

    fn value_matches(&self, value: &serde_json::Value) -> bool {
        match value {
            serde_json::Value::String(value) => self.value_pattern.is_match(value),
            serde_json::Value::Array(values) => values
                .iter()
                .any(|value| value.as_str().is_some_and(|value| self.value_pattern.is_match(value))),
            _ => false,
        }
    }
}

impl MultifactorAuthenticationProviderBypass for PrincipalAttributeBypass {
    fn is_authentication_request_honored(
        &self,
        authentication: &Authentication,
        _service: Option<&dyn RegisteredService>,
        provider: &MultifactorAuthenticationProvider,
    ) -> bool {
        let bypassed = authentication
            .principal()
            .attribute(&self.attribute_name)
            .map(|value| self.value_matches(value))
            .unwrap_or(false);

        if bypassed {
            debug!(
                provider = %provider,
                principal = %authentication.principal(),
                attribute = %self.attribute_name,
                "Principal attribute matched, bypassing the provider"
            );
        }
        !bypassed
    }
}
