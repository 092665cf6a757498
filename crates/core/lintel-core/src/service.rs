//! Target services and per-service multifactor policy
//!
//! The service registry itself is an external collaborator; this module
//! defines the value types the decision core reads from it and the
//! capability trait it consumes.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The service a login attempt targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier, typically its URL
    pub id: String,
}

impl Service {
    /// Create a new service value
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Behavior when a required multifactor provider is unreachable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FailureMode {
    /// The provider is advertised but never hard-fails the login;
    /// availability is not even probed
    None,
    /// The login proceeds without the factor when the provider is down
    Open,
    /// The login must not proceed without the factor
    Closed,
}

impl Default for FailureMode {
    fn default() -> Self {
        FailureMode::Closed
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::None => f.write_str("NONE"),
            FailureMode::Open => f.write_str("OPEN"),
            FailureMode::Closed => f.write_str("CLOSED"),
        }
    }
}

/// Per-service multifactor configuration from the service registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredServiceMultifactorPolicy {
    /// Providers the service requires, by provider id
    pub provider_ids: HashSet<String>,
    /// Failure-mode override; takes precedence over the provider's
    /// global mode when present
    pub failure_mode: Option<FailureMode>,
}

impl RegisteredServiceMultifactorPolicy {
    /// Create an empty policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure-mode override
    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = Some(failure_mode);
        self
    }

    /// Require a provider by id
    pub fn require_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_ids.insert(provider_id.into());
        self
    }
}

/// Registry-backed view of a service, as consumed by the decision core
pub trait RegisteredService: Send + Sync {
    /// The registered service identifier
    fn service_id(&self) -> &str;

    /// The service's multifactor policy, if one is configured
    fn multifactor_policy(&self) -> Option<&RegisteredServiceMultifactorPolicy>;
}

/// Plain in-memory registered service
#[derive(Debug, Clone, Default)]
pub struct BasicRegisteredService {
    /// The registered service identifier
    pub service_id: String,
    /// Optional multifactor policy
    pub multifactor_policy: Option<RegisteredServiceMultifactorPolicy>,
}

impl BasicRegisteredService {
    /// Create a registered service with no multifactor policy
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            multifactor_policy: None,
        }
    }

    /// Attach a multifactor policy
    pub fn with_multifactor_policy(mut self, policy: RegisteredServiceMultifactorPolicy) -> Self {
        self.multifactor_policy = Some(policy);
        self
    }
}

impl RegisteredService for BasicRegisteredService {
    fn service_id(&self) -> &str {
        &self.service_id
    }

    fn multifactor_policy(&self) -> Option<&RegisteredServiceMultifactorPolicy> {
        self.multifactor_policy.as_ref()
    }
}
