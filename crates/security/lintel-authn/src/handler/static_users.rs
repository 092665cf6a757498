//! Static user-map handler for development and testing

use std::collections::HashMap;

use async_trait::async_trait;
use lintel_core::{
    Credential, CredentialMetadata, HandlerError, HandlerResult, Principal, UsernamePasswordCredential,
};

use super::{AuthenticationHandler, PrincipalResolver};

/// Verifies username/password credentials against a fixed in-memory map
///
/// Intended for development and test deployments; production deployments
/// register handlers backed by a real account store.
pub struct StaticUsersHandler {
    name: String,
    users: HashMap<String, String>,
}

impl StaticUsersHandler {
    /// Create a handler with the default name over the given username to
    /// password map
    pub fn new(users: HashMap<String, String>) -> Self {
        Self::named("static-users", users)
    }

    /// Create a handler with an explicit name
    pub fn named(name: impl Into<String>, users: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            users,
        }
    }
}

#[async_trait]
impl AuthenticationHandler for StaticUsersHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self, credential: &dyn Credential) -> bool {
        credential.as_any().is::<UsernamePasswordCredential>()
    }

    async fn authenticate(&self, credential: &dyn Credential) -> Result<HandlerResult, HandlerError> {
        let submitted = match credential.as_any().downcast_ref::<UsernamePasswordCredential>() {
            Some(submitted) => submitted,
            None => {
                return Err(HandlerError::UnsupportedCredential(
                    credential.credential_type().to_string(),
                ))
            }
        };

        let expected = self
            .users
            .get(submitted.username())
            .ok_or_else(|| HandlerError::AccountNotFound(submitted.username().to_string()))?;

        if expected != submitted.password() {
            return Err(HandlerError::InvalidCredentials);
        }

        Ok(HandlerResult::new(
            self.name.clone(),
            Principal::new(submitted.username()),
            CredentialMetadata::from_credential(credential),
        ))
    }
}

/// Resolver that merges a fixed attribute map into every resolved principal
pub struct AttributeMergingResolver {
    attributes: HashMap<String, serde_json::Value>,
}

impl AttributeMergingResolver {
    /// Create a resolver merging the given attributes
    pub fn new(attributes: HashMap<String, serde_json::Value>) -> Self {
        Self { attributes }
    }
}

#[async_trait]
impl PrincipalResolver for AttributeMergingResolver {
    async fn resolve(&self, result: &HandlerResult) -> Result<Principal, HandlerError> {
        let mut principal = result.principal().clone();
        principal.merge_attributes(self.attributes.clone());
        Ok(principal)
    }
}
