use serde::{Deserialize, Serialize};

/// Provider metadata tier the end user can write at signup time.
/// Attacker-controllable; only consulted when the trusted tier is silent,
/// and only through the intent mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UntrustedMetadata {
    /// Raw signup intent ("customer", "vendor", "admin")
    pub signup_intent: Option<String>,
}
