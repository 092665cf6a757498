//! Multifactor provider resolution
//!
//! Decides whether a configured step-up factor applies to the current
//! request (`supports`) and how its unreachability affects the overall
//! login (`is_available` under a NONE/OPEN/CLOSED failure mode).
//!
//! The surrounding flow engine owns *when* these questions are asked; this
//! module only answers them.

use std::fmt;

pub mod bypass;
pub mod provider;

pub use bypass::{MultifactorAuthenticationProviderBypass, PrincipalAttributeBypass};
pub use provider::{
    AlwaysAvailable, ApplicabilityCheck, AvailabilityProbe, MultifactorAuthenticationProvider,
    MultifactorAuthenticationProviderBuilder,
};

/// A step-up event raised by the surrounding flow engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: String,
}

impl Event {
    /// Create an event with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The event identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Anchor a pattern so it must match a whole identifier, not a substring
pub(crate) fn anchored_pattern(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}
