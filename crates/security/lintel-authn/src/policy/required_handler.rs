//! Satisfied when one specific handler succeeded

use super::{AuthenticationPolicy, PolicyContext};

/// Succeeds when the named handler is among the successes, irrespective of
/// every other handler's outcome
#[derive(Debug, Clone)]
pub struct RequiredHandlerAuthenticationPolicy {
    handler_name: String,
    try_all: bool,
}

impl RequiredHandlerAuthenticationPolicy {
    /// Create the policy; `try_all` controls whether evaluation stops once
    /// the required handler has succeeded
    pub fn new(handler_name: impl Into<String>, try_all: bool) -> Self {
        Self {
            handler_name: handler_name.into(),
            try_all,
        }
    }

    fn required_handler_succeeded(&self, context: &PolicyContext<'_>) -> bool {
        context.successes.contains_key(&self.handler_name)
    }
}

impl AuthenticationPolicy for RequiredHandlerAuthenticationPolicy {
    fn is_satisfied_by(&self, context: &PolicyContext<'_>) -> bool {
        self.required_handler_succeeded(context)
    }

    fn should_stop_evaluation(&self, context: &PolicyContext<'_>) -> bool {
        !self.try_all && self.required_handler_succeeded(context)
    }
}
