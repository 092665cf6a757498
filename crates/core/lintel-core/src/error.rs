//! Per-handler failure causes
//!
//! A handler failure is recoverable: the authentication manager records the
//! cause under the handler's name and keeps evaluating. Only the final policy
//! verdict escalates, so these causes travel inside the `Authentication`
//! aggregate and must stay cheap to clone and serialize.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cause of a single handler rejecting a single credential
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerError {
    /// The presented secret failed verification
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account matches the credential
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The account is administratively locked
    #[error("Account is locked")]
    AccountLocked,

    /// The account is disabled
    #[error("Account is disabled")]
    AccountDisabled,

    /// The credential is valid but past its expiration
    #[error("Credential has expired")]
    CredentialExpired,

    /// The handler cannot process this credential type
    #[error("Unsupported credential type: {0}")]
    UnsupportedCredential(String),

    /// The verification backend could not be consulted
    #[error("Backend error: {0}")]
    Backend(String),
}

impl HandlerError {
    /// Whether the cause lies with the submitted credential rather than
    /// the verification infrastructure
    pub fn is_credential_fault(&self) -> bool {
        !matches!(self, HandlerError::Backend(_))
    }
}
