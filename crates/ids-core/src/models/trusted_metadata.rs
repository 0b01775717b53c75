use serde::{Deserialize, Serialize};

/// Provider metadata tier settable only by privileged backend action.
/// Parsed at the boundary so internal code never touches an untyped map;
/// fields the provider adds later are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustedMetadata {
    /// Raw role value; validated against the closed enum during role
    /// derivation, unknown values falling back to standard.
    pub role: Option<String>,
}
