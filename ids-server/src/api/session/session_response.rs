use ids_core::{Identity, Role};

use serde::Serialize;

/// Current-identity response, tagged rather than shaped with optional
/// fields: callers branch on `state` and never probe for half-present
/// data.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionResponse {
    Anonymous,
    Authenticated {
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        avatar_url: Option<String>,
    },
}

impl From<Identity> for SessionResponse {
    fn from(identity: Identity) -> Self {
        Self::Authenticated {
            role: identity.role,
            display_name: identity.display_name,
            email: Some(identity.email),
            avatar_url: identity.avatar_url,
        }
    }
}

impl SessionResponse {
    /// Provisional shape for a valid session with no stored record
    pub fn provisional(role: Role, email: Option<String>) -> Self {
        Self::Authenticated {
            role,
            display_name: None,
            email,
            avatar_url: None,
        }
    }
}
