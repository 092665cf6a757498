//! The multifactor authentication provider

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lintel_core::{Authentication, FailureMode, RegisteredService};
use regex::Regex;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::bypass::MultifactorAuthenticationProviderBypass;
use super::{anchored_pattern, Event};
use crate::error::{Error, Result};

/// Probe timeout applied when none is configured
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Live reachability check against the backing factor endpoint
#[async_trait]
pub trait AvailabilityProbe: Send + Sync {
    /// Whether the provider's backend is currently reachable
    async fn check(&self) -> bool;
}

/// Probe for providers with no external dependency; always reachable
pub struct AlwaysAvailable;

#[async_trait]
impl AvailabilityProbe for AlwaysAvailable {
    async fn check(&self) -> bool {
        true
    }
}

/// Provider-specific applicability constraints beyond event matching and
/// bypass, consulted last by [`MultifactorAuthenticationProvider::supports`]
pub trait ApplicabilityCheck: Send + Sync {
    /// Whether the provider should answer for this request
    fn applies(
        &self,
        event: &Event,
        authentication: &Authentication,
        service: Option<&dyn RegisteredService>,
    ) -> bool;
}

/// One configured step-up factor
///
/// The provider id doubles as the pattern incoming event identifiers are
/// matched against (whole-identifier match, not substring). Two providers
/// are equal iff id and order both match; the order is the tie-break for
/// external selection among providers supporting the same event.
pub struct MultifactorAuthenticationProvider {
    id: String,
    event_pattern: Regex,
    order: i32,
    global_failure_mode: Option<FailureMode>,
    bypass: Option<Arc<dyn MultifactorAuthenticationProviderBypass>>,
    applicability: Option<Arc<dyn ApplicabilityCheck>>,
    probe: Arc<dyn AvailabilityProbe>,
    probe_timeout: Duration,
}

impl MultifactorAuthenticationProvider {
    /// Start configuring a provider with the given id
    pub fn builder(id: impl Into<String>) -> MultifactorAuthenticationProviderBuilder {
        MultifactorAuthenticationProviderBuilder::new(id)
    }

    /// The provider id, also the event identifier pattern it answers for
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Tie-break order for external selection
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Whether this provider applies to the given step-up request
    pub fn supports(
        &self,
        event: Option<&Event>,
        authentication: &Authentication,
        service: Option<&dyn RegisteredService>,
    ) -> bool {
        let event = match event {
            Some(event) if self.event_pattern.is_match(event.id()) => event,
            Some(event) => {
                debug!(
                    event = event.id(),
                    provider = %self.id,
                    "Event id is not applicable to this provider"
                );
                return false;
            }
            None => {
                debug!(provider = %self.id, "No event provided, request cannot be supported");
                return false;
            }
        };

        if let Some(bypass) = &self.bypass {
            if !bypass.is_authentication_request_honored(authentication, service, self) {
                debug!(
                    provider = %self.id,
                    "Request cannot be supported as it is configured for bypass"
                );
                return false;
            }
        }

        if let Some(applicability) = &self.applicability {
            if !applicability.applies(event, authentication, service) {
                debug!(provider = %self.id, "Provider voted not to support this request");
                return false;
            }
        }

        debug!(provider = %self.id, "Provider voted to support this request");
        true
    }

    /// Whether the provider is reachable enough for the login to proceed
    ///
    /// Resolves the effective failure mode (service override, else the
    /// provider's global mode, else CLOSED), then runs the reachability
    /// probe under the configured timeout. An unreachable CLOSED provider
    /// fails with [`Error::ProviderUnavailable`]; an unreachable OPEN
    /// provider returns `Ok(false)` and the login proceeds without the
    /// factor.
    pub async fn is_available(&self, service: &dyn RegisteredService) -> Result<bool> {
        let failure_mode = self.effective_failure_mode(service);
        debug!(
            provider = %self.id,
            service = service.service_id(),
            %failure_mode,
            "Resolved multifactor failure mode"
        );

        if failure_mode == FailureMode::None {
            debug!(provider = %self.id, "Failure mode is NONE, assuming the provider is available");
            return Ok(true);
        }

        let reachable = match timeout(self.probe_timeout, self.probe.check()).await {
            Ok(reachable) => reachable,
            Err(_) => {
                warn!(
                    provider = %self.id,
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "Availability probe timed out"
                );
                false
            }
        };

        if reachable {
            return Ok(true);
        }

        if failure_mode == FailureMode::Closed {
            warn!(
                provider = %self.id,
                service = service.service_id(),
                "Provider could not be reached, authentication shall fail"
            );
            return Err(Error::ProviderUnavailable {
                provider_id: self.id.clone(),
                service_id: service.service_id().to_string(),
            });
        }

        warn!(
            provider = %self.id,
            service = service.service_id(),
            %failure_mode,
            "Provider could not be reached, authentication will proceed without it"
        );
        Ok(false)
    }

    /// Whether this provider's id matches a caller-supplied pattern
    ///
    /// The inverse of event matching, used by external selection logic.
    pub fn matches(&self, identifier: &str) -> bool {
        Regex::new(&anchored_pattern(identifier))
            .map(|pattern| pattern.is_match(&self.id))
            .unwrap_or(false)
    }

    fn effective_failure_mode(&self, service: &dyn RegisteredService) -> FailureMode {
        service
            .multifactor_policy()
            .and_then(|policy| policy.failure_mode)
            .or(self.global_failure_mode)
            .unwrap_or_default()
    }
}

impl fmt::Debug for MultifactorAuthenticationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultifactorAuthenticationProvider")
            .field("id", &self.id)
            .field("order", &self.order)
            .field("global_failure_mode", &self.global_failure_mode)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}

impl fmt::Display for MultifactorAuthenticationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl PartialEq for MultifactorAuthenticationProvider {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.order == other.order
    }
}

impl Eq for MultifactorAuthenticationProvider {}

impl Hash for MultifactorAuthenticationProvider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.order.hash(state);
    }
}

/// Builder for [`MultifactorAuthenticationProvider`]
pub struct MultifactorAuthenticationProviderBuilder {
    id: String,
    order: i32,
    global_failure_mode: Option<FailureMode>,
    bypass: Option<Arc<dyn MultifactorAuthenticationProviderBypass>>,
    applicability: Option<Arc<dyn ApplicabilityCheck>>,
    probe: Option<Arc<dyn AvailabilityProbe>>,
    probe_timeout: Duration,
}

impl MultifactorAuthenticationProviderBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order: 0,
            global_failure_mode: None,
            bypass: None,
            applicability: None,
            probe: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the tie-break order
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Set the provider's global failure mode
    pub fn global_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.global_failure_mode = Some(failure_mode);
        self
    }

    /// Attach a bypass evaluator
    pub fn bypass(mut self, bypass: Arc<dyn MultifactorAuthenticationProviderBypass>) -> Self {
        self.bypass = Some(bypass);
        self
    }

    /// Attach provider-specific applicability constraints
    pub fn applicability(mut self, applicability: Arc<dyn ApplicabilityCheck>) -> Self {
        self.applicability = Some(applicability);
        self
    }

    /// Set the reachability probe; defaults to [`AlwaysAvailable`]
    pub fn probe(mut self, probe: Arc<dyn AvailabilityProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Bound the probe's round trip; defaults to [`DEFAULT_PROBE_TIMEOUT`]
    pub fn probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    /// Build the provider, compiling the id into its event pattern
    pub fn build(self) -> Result<MultifactorAuthenticationProvider> {
        if self.id.trim().is_empty() {
            return Err(Error::Configuration("provider id must not be empty".to_string()));
        }
        let event_pattern = Regex::new(&anchored_pattern(&self.id)).map_err(|source| {
            Error::Configuration(format!("invalid provider id pattern '{}': {}", self.id, source))
        })?;

        Ok(MultifactorAuthenticationProvider {
            id: self.id,
            event_pattern,
            order: self.order,
            global_failure_mode: self.global_failure_mode,
            bypass: self.bypass,
            applicability: self.applicability,
            probe: self.probe.unwrap_or_else(|| Arc::new(AlwaysAvailable)),
            probe_timeout: self.probe_timeout,
        })
    }
}
