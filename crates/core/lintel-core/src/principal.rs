//! Resolved identity after credential verification

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved identity: a stable identifier plus released attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for the identity (typically the username)
    pub id: String,
    /// Attributes attached to the identity
    pub attributes: HashMap<String, serde_json::Value>,
}

impl Principal {
    /// Create a principal with no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Create a principal with the given attributes
    pub fn with_attributes(id: impl Into<String>, attributes: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// Look up a single attribute by name
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }

    /// Merge attributes into this principal; incoming values replace
    /// existing ones under the same name
    pub fn merge_attributes(&mut self, attributes: HashMap<String, serde_json::Value>) {
        self.attributes.extend(attributes);
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
