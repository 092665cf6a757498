//! # Lintel Authn
//!
//! The decision engines of the Lintel single sign-on server:
//!
//! - **Authentication manager**: runs pluggable authentication handlers
//!   against the credentials of a transaction and combines the per-handler
//!   verdicts under a configurable success policy
//! - **Policy family**: `Any` / `All` / `RequiredHandler` built-ins behind an
//!   open strategy trait, so operators can supply their own criteria
//! - **Multifactor providers**: per-factor applicability (`supports`) and
//!   availability (`is_available`) decisions with NONE/OPEN/CLOSED failure
//!   modes, bypass evaluators and bounded reachability probes
//!
//! Ticket issuance, protocol endpoints and UI flow orchestration are
//! external collaborators; this crate only decides whether a login attempt
//! succeeds, which identity it resolves to, and whether a step-up factor
//! applies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use lintel_authn::handler::StaticUsersHandler;
//! use lintel_authn::manager::AuthenticationManager;
//! use lintel_core::{AuthenticationTransaction, Service, UsernamePasswordCredential};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut users = HashMap::new();
//!     users.insert("alice".to_string(), "correct horse".to_string());
//!
//!     let manager = AuthenticationManager::builder()
//!         .register_handler(Arc::new(StaticUsersHandler::new(users)))
//!         .build();
//!
//!     let transaction = AuthenticationTransaction::new(
//!         Some(Service::new("https://app.example.org/")),
//!         vec![Arc::new(UsernamePasswordCredential::new("alice", "correct horse"))],
//!     );
//!
//!     let authentication = manager.authenticate(&transaction).await?;
//!     println!("authenticated as {}", authentication.principal().id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`]: engine error taxonomy
//! - [`handler`]: handler and principal-resolver capability traits
//! - [`policy`]: success-criterion strategies
//! - [`manager`]: the multi-credential authentication resolver
//! - [`mfa`]: multifactor provider applicability and availability

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

/// Error types for the decision engines
pub mod error;

/// Authentication handler and principal resolver capabilities
pub mod handler;

/// The authentication manager
pub mod manager;

/// Multifactor provider resolution
pub mod mfa;

/// Success-criterion policy family
pub mod policy;

pub use error::{Error, Result};
pub use handler::{AuthenticationHandler, PrincipalResolver};
pub use manager::{AuthenticationManager, AuthenticationManagerBuilder};
pub use mfa::{
    AvailabilityProbe, Event, MultifactorAuthenticationProvider,
    MultifactorAuthenticationProviderBypass,
};
pub use policy::{AuthenticationPolicy, PolicyContext};
