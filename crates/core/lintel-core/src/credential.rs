//! Credential model
//!
//! A credential is opaque to the decision core: handlers downcast to the
//! concrete type they verify. The aggregate result never retains secret
//! material; it keeps a [`CredentialMetadata`] snapshot instead.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Opaque secret material proving identity for one authentication factor
///
/// Implementations must never expose the secret through `Debug` output.
pub trait Credential: fmt::Debug + Send + Sync {
    /// Loggable identifier for the credential (e.g. the username), never
    /// the secret itself
    fn id(&self) -> String;

    /// Short type tag recorded in credential metadata
    fn credential_type(&self) -> &'static str;

    /// Downcasting support for handler-specific credential types
    fn as_any(&self) -> &dyn Any;
}

/// Secret-stripped snapshot of a credential, safe to retain and serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialMetadata {
    /// The credential's loggable identifier
    pub id: String,
    /// The credential's type tag
    pub credential_type: String,
}

impl CredentialMetadata {
    /// Snapshot the given credential
    pub fn from_credential(credential: &dyn Credential) -> Self {
        Self {
            id: credential.id(),
            credential_type: credential.credential_type().to_string(),
        }
    }
}

/// Username and password submitted as the primary factor
///
/// The password is zeroized from memory on drop.
#[derive(Clone)]
pub struct UsernamePasswordCredential {
    username: String,
    password: String,
}

impl UsernamePasswordCredential {
    /// Create a new username/password credential
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The submitted username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The submitted password
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for UsernamePasswordCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernamePasswordCredential")
            .field("username", &self.username)
            .field("password", &"******")
            .finish()
    }
}

impl Drop for UsernamePasswordCredential {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl Credential for UsernamePasswordCredential {
    fn id(&self) -> String {
        self.username.clone()
    }

    fn credential_type(&self) -> &'static str {
        "password"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One-time code submitted as a secondary factor
#[derive(Clone)]
pub struct OneTimeCodeCredential {
    account_id: String,
    code: String,
}

impl OneTimeCodeCredential {
    /// Create a new one-time code credential for the given account
    pub fn new(account_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            code: code.into(),
        }
    }

    /// The account the code was issued for
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The submitted code
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Debug for OneTimeCodeCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneTimeCodeCredential")
            .field("account_id", &self.account_id)
            .field("code", &"******")
            .finish()
    }
}

impl Drop for OneTimeCodeCredential {
    fn drop(&mut self) {
        self.code.zeroize();
    }
}

impl Credential for OneTimeCodeCredential {
    fn id(&self) -> String {
        self.account_id.clone()
    }

    fn credential_type(&self) -> &'static str {
        "otp"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_strips_the_secret() {
        let credential = UsernamePasswordCredential::new("alice", "hunter2");
        let metadata = CredentialMetadata::from_credential(&credential);

        assert_eq!(metadata.id, "alice");
        assert_eq!(metadata.credential_type, "password");
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let credential = UsernamePasswordCredential::new("alice", "hunter2");
        let rendered = format!("{:?}", credential);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn debug_output_redacts_the_code() {
        let credential = OneTimeCodeCredential::new("alice", "123456");
        let rendered = format!("{:?}", credential);

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("123456"));
    }

    #[test]
    fn credentials_downcast_through_as_any() {
        let credential: &dyn Credential = &OneTimeCodeCredential::new("alice", "123456");

        assert!(credential.as_any().downcast_ref::<OneTimeCodeCredential>().is_some());
        assert!(credential.as_any().downcast_ref::<UsernamePasswordCredential>().is_none());
    }
}
