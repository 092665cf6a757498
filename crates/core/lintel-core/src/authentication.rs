//! Authentication aggregate
//!
//! The aggregate result of one login attempt: the resolved principal, one
//! entry per handler that succeeded, one entry per handler that failed, the
//! secret-stripped credential list and a timestamp. Built once through
//! [`AuthenticationBuilder`], immutable afterwards, and owned by the caller
//! for the life of the session it backs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::credential::CredentialMetadata;
use crate::error::HandlerError;
use crate::principal::Principal;

/// Result of one handler successfully verifying one credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResult {
    handler_name: String,
    principal: Principal,
    credential_metadata: CredentialMetadata,
}

impl HandlerResult {
    /// Create a new handler result
    pub fn new(
        handler_name: impl Into<String>,
        principal: Principal,
        credential_metadata: CredentialMetadata,
    ) -> Self {
        Self {
            handler_name: handler_name.into(),
            principal,
            credential_metadata,
        }
    }

    /// Name of the handler that produced this result
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// The principal the handler resolved
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Metadata of the verified credential
    pub fn credential_metadata(&self) -> &CredentialMetadata {
        &self.credential_metadata
    }

    /// Replace the resolved principal, keeping handler name and metadata
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = principal;
        self
    }
}

/// Aggregate outcome of a login attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authentication {
    principal: Principal,
    successes: HashMap<String, HandlerResult>,
    failures: HashMap<String, HandlerError>,
    credentials: Vec<CredentialMetadata>,
    authenticated_at: DateTime<Utc>,
}

impl Authentication {
    /// Start building a new aggregate
    pub fn builder() -> AuthenticationBuilder {
        AuthenticationBuilder::new()
    }

    /// The resolved principal (from the first successful handler)
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Successful handler results, keyed by handler name
    pub fn successes(&self) -> &HashMap<String, HandlerResult> {
        &self.successes
    }

    /// Handler failure causes, keyed by handler name
    pub fn failures(&self) -> &HashMap<String, HandlerError> {
        &self.failures
    }

    /// Metadata of every credential submitted with the transaction
    pub fn credentials(&self) -> &[CredentialMetadata] {
        &self.credentials
    }

    /// When the aggregate was built
    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}

/// Accumulates per-handler outcomes while a transaction is evaluated
///
/// The first recorded success fixes the aggregate principal; later successes
/// only add to the success map.
#[derive(Debug, Default)]
pub struct AuthenticationBuilder {
    principal: Option<Principal>,
    successes: HashMap<String, HandlerResult>,
    failures: HashMap<String, HandlerError>,
    credentials: Vec<CredentialMetadata>,
}

impl AuthenticationBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the metadata of a submitted credential
    pub fn record_credential(&mut self, metadata: CredentialMetadata) {
        self.credentials.push(metadata);
    }

    /// Record a successful handler result
    pub fn add_success(&mut self, result: HandlerResult) {
        if self.principal.is_none() {
            self.principal = Some(result.principal().clone());
        }
        self.successes.insert(result.handler_name().to_string(), result);
    }

    /// Record a handler failure cause
    pub fn add_failure(&mut self, handler_name: impl Into<String>, cause: HandlerError) {
        self.failures.insert(handler_name.into(), cause);
    }

    /// The principal fixed by the first success, if any
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Successes recorded so far
    pub fn successes(&self) -> &HashMap<String, HandlerResult> {
        &self.successes
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &HashMap<String, HandlerError> {
        &self.failures
    }

    /// Build the immutable aggregate, stamping the current time
    ///
    /// Returns `None` when no success was ever recorded: an `Authentication`
    /// without a principal cannot exist.
    pub fn build(self) -> Option<Authentication> {
        let principal = self.principal?;
        Some(Authentication {
            principal,
            successes: self.successes,
            failures: self.failures,
            credentials: self.credentials,
            authenticated_at: Utc::now(),
        })
    }
}
