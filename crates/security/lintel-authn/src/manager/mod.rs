//! The multi-credential authentication resolver
//!
//! Runs every configured handler against every credential it supports,
//! records per-handler outcomes, and lets the configured policy decide the
//! aggregate verdict. A single handler's failure never aborts evaluation;
//! only the final policy verdict escalates.

use std::sync::Arc;

use lintel_core::{Authentication, AuthenticationTransaction, HandlerResult};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::handler::{AuthenticationHandler, PrincipalResolver};
use crate::policy::{AnyAuthenticationPolicy, AuthenticationPolicy, PolicyContext};

struct HandlerBinding {
    handler: Arc<dyn AuthenticationHandler>,
    resolver: Option<Arc<dyn PrincipalResolver>>,
}

/// Orchestrates handlers over the credentials of a transaction under a
/// configurable success policy
///
/// Holds only immutable configuration; a single manager is shared across
/// concurrently running transactions.
pub struct AuthenticationManager {
    bindings: Vec<HandlerBinding>,
    policy: Arc<dyn AuthenticationPolicy>,
}

impl AuthenticationManager {
    /// Start configuring a new manager
    pub fn builder() -> AuthenticationManagerBuilder {
        AuthenticationManagerBuilder::new()
    }

    /// Authenticate a transaction, producing the aggregate result or the
    /// policy's rejection
    pub async fn authenticate(&self, transaction: &AuthenticationTransaction) -> Result<Authentication> {
        debug!(
            transaction = %transaction.id(),
            credentials = transaction.credentials().len(),
            handlers = self.bindings.len(),
            "Beginning authentication transaction"
        );

        let mut builder = Authentication::builder();
        for metadata in transaction.credential_metadata() {
            builder.record_credential(metadata);
        }

        let mut handlers_attempted = 0usize;
        'evaluation: for binding in &self.bindings {
            let handler = binding.handler.as_ref();
            let mut attempted = false;
            for credential in transaction.credentials() {
                if !handler.supports(credential.as_ref()) {
                    continue;
                }
                if !attempted {
                    attempted = true;
                    handlers_attempted += 1;
                }
                match handler.authenticate(credential.as_ref()).await {
                    Ok(result) => {
                        let result = self.resolve_principal(binding, result).await;
                        debug!(
                            handler = handler.name(),
                            principal = %result.principal(),
                            "Authentication handler succeeded"
                        );
                        builder.add_success(result);
                        let context = PolicyContext {
                            successes: builder.successes(),
                            failures: builder.failures(),
                            handlers_attempted,
                        };
                        if self.policy.should_stop_evaluation(&context) {
                            debug!(
                                handler = handler.name(),
                                "Authentication policy satisfied, stopping handler evaluation"
                            );
                            break 'evaluation;
                        }
                    }
                    Err(cause) => {
                        warn!(
                            handler = handler.name(),
                            credential = %credential.id(),
                            cause = %cause,
                            "Authentication handler failed"
                        );
                        builder.add_failure(handler.name(), cause);
                    }
                }
            }
        }

        let context = PolicyContext {
            successes: builder.successes(),
            failures: builder.failures(),
            handlers_attempted,
        };
        let errors = builder.failures().len();
        let successes = builder.successes().len();

        if !self.policy.is_satisfied_by(&context) {
            warn!(errors, successes, "Authentication policy rejected the transaction");
            return Err(Error::PolicyRejection {
                errors,
                successes,
                failures: builder.failures().clone(),
            });
        }

        let failures = builder.failures().clone();
        match builder.build() {
            Some(authentication) => {
                debug!(
                    transaction = %transaction.id(),
                    principal = %authentication.principal(),
                    successes,
                    errors,
                    "Authentication transaction accepted"
                );
                Ok(authentication)
            }
            None => {
                warn!(errors, successes, "Policy satisfied without any successful handler");
                Err(Error::PolicyRejection {
                    errors,
                    successes,
                    failures,
                })
            }
        }
    }

    async fn resolve_principal(&self, binding: &HandlerBinding, result: HandlerResult) -> HandlerResult {
        let resolver = match &binding.resolver {
            Some(resolver) => resolver,
            None => return result,
        };
        match resolver.resolve(&result).await {
            Ok(principal) => result.with_principal(principal),
            Err(cause) => {
                // Resolution is pass-through: keep the handler's principal.
                warn!(
                    handler = result.handler_name(),
                    cause = %cause,
                    "Principal resolution failed, keeping handler principal"
                );
                result
            }
        }
    }
}

/// Builder for [`AuthenticationManager`]
#[derive(Default)]
pub struct AuthenticationManagerBuilder {
    bindings: Vec<HandlerBinding>,
    policy: Option<Arc<dyn AuthenticationPolicy>>,
}

impl AuthenticationManagerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler with no principal resolver
    pub fn register_handler(mut self, handler: Arc<dyn AuthenticationHandler>) -> Self {
        self.bindings.push(HandlerBinding {
            handler,
            resolver: None,
        });
        self
    }

    /// Register a handler paired with a principal resolver
    pub fn register_handler_with_resolver(
        mut self,
        handler: Arc<dyn AuthenticationHandler>,
        resolver: Arc<dyn PrincipalResolver>,
    ) -> Self {
        self.bindings.push(HandlerBinding {
            handler,
            resolver: Some(resolver),
        });
        self
    }

    /// Set the success policy; defaults to `AnyAuthenticationPolicy`
    /// without `try_all`
    pub fn with_policy(mut self, policy: Arc<dyn AuthenticationPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the manager
    pub fn build(self) -> AuthenticationManager {
        AuthenticationManager {
            bindings: self.bindings,
            policy: self
                .policy
                .unwrap_or_else(|| Arc::new(AnyAuthenticationPolicy::new(false))),
        }
    }
}
