//! Success-criterion policy family
//!
//! A policy turns the per-handler outcomes accumulated during a transaction
//! into a single verdict, and decides whether handler evaluation may stop
//! early. Policies are pure functions of the context plus their
//! construction-time parameters, so repeated evaluation is idempotent.
//!
//! The family is open for extension: the manager depends on the trait, never
//! on the set of built-ins, so operators can supply custom criteria.

use std::collections::HashMap;

use lintel_core::{HandlerError, HandlerResult};

pub mod all;
pub mod any;
pub mod required_handler;

pub use all::AllAuthenticationPolicy;
pub use any::AnyAuthenticationPolicy;
pub use required_handler::RequiredHandlerAuthenticationPolicy;

/// Read-only view of the outcomes recorded so far in one transaction
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    /// Successful handler results, keyed by handler name
    pub successes: &'a HashMap<String, HandlerResult>,
    /// Handler failure causes, keyed by handler name
    pub failures: &'a HashMap<String, HandlerError>,
    /// Number of handlers that supported at least one credential
    pub handlers_attempted: usize,
}

/// Strategy deciding whether the accumulated outcomes satisfy the
/// login's success criterion
pub trait AuthenticationPolicy: Send + Sync {
    /// Final verdict over the recorded outcomes
    fn is_satisfied_by(&self, context: &PolicyContext<'_>) -> bool;

    /// Whether handler evaluation may stop, consulted after each
    /// successful handler evaluation
    fn should_stop_evaluation(&self, context: &PolicyContext<'_>) -> bool {
        let _ = context;
        false
    }
}
