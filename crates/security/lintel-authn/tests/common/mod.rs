//! Shared stubs for the integration suites
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lintel_authn::handler::{AuthenticationHandler, PrincipalResolver};
use lintel_authn::mfa::AvailabilityProbe;
use lintel_core::{
    AuthenticationTransaction, Credential, CredentialMetadata, HandlerError, HandlerResult, Principal,
    Service, UsernamePasswordCredential,
};

/// Handler that supports every credential and either verifies or rejects
/// them all
pub struct StubHandler {
    name: String,
    principal_id: String,
    succeed: bool,
}

impl StubHandler {
    pub fn succeeding(name: &str) -> Arc<dyn AuthenticationHandler> {
        Arc::new(Self {
            name: name.to_string(),
            principal_id: "nobody".to_string(),
            succeed: true,
        })
    }

    pub fn succeeding_as(name: &str, principal_id: &str) -> Arc<dyn AuthenticationHandler> {
        Arc::new(Self {
            name: name.to_string(),
            principal_id: principal_id.to_string(),
            succeed: true,
        })
    }

    pub fn failing(name: &str) -> Arc<dyn AuthenticationHandler> {
        Arc::new(Self {
            name: name.to_string(),
            principal_id: "nobody".to_string(),
            succeed: false,
        })
    }
}

#[async_trait]
impl AuthenticationHandler for StubHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, _credential: &dyn Credential) -> bool {
        true
    }

    async fn authenticate(&self, credential: &dyn Credential) -> Result<HandlerResult, HandlerError> {
        if self.succeed {
            Ok(HandlerResult::new(
                self.name.clone(),
                Principal::new(self.principal_id.clone()),
                CredentialMetadata::from_credential(credential),
            ))
        } else {
            Err(HandlerError::InvalidCredentials)
        }
    }
}

/// Resolver that always fails, for exercising the pass-through fallback
pub struct FailingResolver;

#[async_trait]
impl PrincipalResolver for FailingResolver {
    async fn resolve(&self, _result: &HandlerResult) -> Result<Principal, HandlerError> {
        Err(HandlerError::Backend("attribute repository offline".to_string()))
    }
}

/// Probe with a fixed answer that counts how often it was consulted
pub struct CountingProbe {
    available: bool,
    calls: AtomicUsize,
}

impl CountingProbe {
    pub fn new(available: bool) -> Arc<Self> {
        Arc::new(Self {
            available,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvailabilityProbe for CountingProbe {
    async fn check(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.available
    }
}

/// Probe that never answers within any sane timeout
pub struct HangingProbe;

#[async_trait]
impl AvailabilityProbe for HangingProbe {
    async fn check(&self) -> bool {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        true
    }
}

/// Transaction carrying two password credentials, as a typical password
/// plus step-up submission would
pub fn two_credential_transaction() -> AuthenticationTransaction {
    AuthenticationTransaction::new(
        Some(Service::new("https://app.example.org/login")),
        vec![
            Arc::new(UsernamePasswordCredential::new("alice", "first secret")),
            Arc::new(UsernamePasswordCredential::new("alice", "second secret")),
        ],
    )
}
