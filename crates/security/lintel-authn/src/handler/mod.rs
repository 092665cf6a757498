//! Authentication handler and principal resolver capabilities
//!
//! Handlers are pluggable verifiers for one credential type, implemented by
//! collaborators and consumed here by contract. A resolver is an optional
//! 1:1 companion to a handler that post-processes the principal of a
//! successful verification (attribute merge); principal resolution is
//! pass-through for this core.

use async_trait::async_trait;
use lintel_core::{Credential, HandlerError, HandlerResult, Principal};

/// A pluggable verifier for one credential type
#[async_trait]
pub trait AuthenticationHandler: Send + Sync {
    /// Unique name identifying this handler in success and failure maps
    fn name(&self) -> &str;

    /// Whether this handler knows how to verify the given credential
    fn supports(&self, credential: &dyn Credential) -> bool;

    /// Verify a single credential, resolving the principal on success
    async fn authenticate(&self, credential: &dyn Credential) -> Result<HandlerResult, HandlerError>;
}

/// Post-processes the principal of a successful handler result
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    /// Resolve a refined principal from the handler result
    async fn resolve(&self, result: &HandlerResult) -> Result<Principal, HandlerError>;
}

pub mod static_users;

pub use static_users::{AttributeMergingResolver, StaticUsersHandler};
