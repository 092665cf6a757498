//! # Lintel Core
//!
//! Shared value model for the Lintel single sign-on decision core:
//!
//! - **Credentials**: opaque, handler-specific secret material with
//!   secret-stripped metadata snapshots
//! - **Principals**: resolved identities with mergeable attributes
//! - **Authentication**: the immutable aggregate produced by a login attempt,
//!   recording per-handler successes and failures
//! - **Transactions**: one or more credentials submitted together for a
//!   single login attempt
//! - **Services**: target-service values and per-service multifactor policy
//!
//! The decision engines that consume these types live in `lintel-authn`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lintel_core::{AuthenticationTransaction, Service, UsernamePasswordCredential};
//!
//! let transaction = AuthenticationTransaction::new(
//!     Some(Service::new("https://app.example.org/")),
//!     vec![Arc::new(UsernamePasswordCredential::new("alice", "correct horse"))],
//! );
//!
//! assert_eq!(transaction.credentials().len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

/// Authentication aggregate, handler results and the aggregate builder
pub mod authentication;

/// Credential trait, concrete credentials and credential metadata
pub mod credential;

/// Per-handler failure causes
pub mod error;

/// Resolved identity with attributes
pub mod principal;

/// Target services, registered-service policy and failure modes
pub mod service;

/// One login attempt's worth of credentials
pub mod transaction;

pub use authentication::{Authentication, AuthenticationBuilder, HandlerResult};
pub use credential::{Credential, CredentialMetadata, OneTimeCodeCredential, UsernamePasswordCredential};
pub use error::HandlerError;
pub use principal::Principal;
pub use service::{
    BasicRegisteredService, FailureMode, RegisteredService, RegisteredServiceMultifactorPolicy, Service,
};
pub use transaction::AuthenticationTransaction;
