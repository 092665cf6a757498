//! Satisfied by at least one successful handler

use super::{AuthenticationPolicy, PolicyContext};

/// Succeeds as soon as any handler succeeds
///
/// With `try_all` set, evaluation always exhausts the configured handlers
/// before the verdict; otherwise it stops at the first success.
#[derive(Debug, Clone, Copy)]
pub struct AnyAuthenticationPolicy {
    try_all: bool,
}

impl AnyAuthenticationPolicy {
    /// Create the policy; `try_all` controls whether evaluation stops at
    /// the first success
    pub fn new(try_all: bool) -> Self {
        Self { try_all }
    }
}

impl Default for AnyAuthenticationPolicy {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AuthenticationPolicy for AnyAuthenticationPolicy {
    fn is_satisfied_by(&self, context: &PolicyContext<'_>) -> bool {
        !context.successes.is_empty()
    }

    fn should_stop_evaluation(&self, context: &PolicyContext<'_>) -> bool {
        !self.try_all && !context.successes.is_empty()
    }
}
