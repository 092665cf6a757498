//! One login attempt's worth of credentials

use std::sync::Arc;

use uuid::Uuid;

use crate::credential::{Credential, CredentialMetadata};
use crate::service::Service;

/// One or more credentials submitted together for a single login attempt
///
/// Immutable once created. The id exists for log correlation only and takes
/// no part in any decision.
#[derive(Debug, Clone)]
pub struct AuthenticationTransaction {
    id: Uuid,
    service: Option<Service>,
    credentials: Vec<Arc<dyn Credential>>,
}

impl AuthenticationTransaction {
    /// Wrap a target service and credentials into a transaction
    pub fn new(service: Option<Service>, credentials: Vec<Arc<dyn Credential>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            service,
            credentials,
        }
    }

    /// Correlation id for this attempt
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The service the login is for, if any
    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    /// The submitted credentials, in submission order
    pub fn credentials(&self) -> &[Arc<dyn Credential>] {
        &self.credentials
    }

    /// Secret-stripped snapshots of every submitted credential
    pub fn credential_metadata(&self) -> Vec<CredentialMetadata> {
        self.credentials
            .iter()
            .map(|credential| CredentialMetadata::from_credential(credential.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::UsernamePasswordCredential;

    #[test]
    fn transactions_get_distinct_correlation_ids() {
        let first = AuthenticationTransaction::new(None, Vec::new());
        let second = AuthenticationTransaction::new(None, Vec::new());

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn metadata_covers_every_credential_in_order() {
        let transaction = AuthenticationTransaction::new(
            Some(Service::new("https://app.example.org/")),
            vec![
                Arc::new(UsernamePasswordCredential::new("alice", "hunter2")),
                Arc::new(UsernamePasswordCredential::new("bob", "hunter3")),
            ],
        );

        let metadata = transaction.credential_metadata();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata[0].id, "alice");
        assert_eq!(metadata[1].id, "bob");
    }
}
