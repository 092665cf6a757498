//! Satisfied only when every attempted handler succeeded

use super::{AuthenticationPolicy, PolicyContext};

/// Succeeds only when no handler failed and every attempted handler
/// produced a success
///
/// Never stops evaluation early; the verdict needs every handler's outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllAuthenticationPolicy;

impl AllAuthenticationPolicy {
    /// Create the policy
    pub fn new() -> Self {
        Self
    }
}

impl AuthenticationPolicy for AllAuthenticationPolicy {
    fn is_satisfied_by(&self, context: &PolicyContext<'_>) -> bool {
        context.failures.is_empty() && context.successes.len() == context.handlers_attempted
    }
}
