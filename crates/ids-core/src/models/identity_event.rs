//! Parsed change-notification payload.
//!
//! The provider delivers `{ type, data }` where `data` is the identity
//! snapshot at emission time. Parsing happens only after signature
//! verification; nothing here is persisted.

use crate::{EventKind, Role, TrustedMetadata, UntrustedMetadata, derive_role};

use serde::Deserialize;

/// A verified change notification, as delivered by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: IdentityEventData,
}

impl IdentityEvent {
    pub fn kind(&self) -> EventKind {
        EventKind::parse(&self.event_type)
    }
}

/// One entry in the provider's email-address list
#[derive(Debug, Clone, Deserialize)]
pub struct EmailAddress {
    pub id: String,
    pub email_address: String,
}

/// Identity snapshot carried by a notification
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityEventData {
    /// Provider-assigned identity id
    pub id: String,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default)]
    pub primary_email_address_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub public_metadata: TrustedMetadata,
    #[serde(default)]
    pub unsafe_metadata: UntrustedMetadata,
}

impl IdentityEventData {
    /// The address marked primary, falling back to the first listed one.
    pub fn primary_email(&self) -> Option<&str> {
        if let Some(ref primary_id) = self.primary_email_address_id
            && let Some(addr) = self.email_addresses.iter().find(|a| &a.id == primary_id)
        {
            return Some(addr.email_address.as_str());
        }

        self.email_addresses
            .first()
            .map(|a| a.email_address.as_str())
    }

    /// Display name derived from the provider name parts
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }

    /// Effective role under the metadata precedence rules
    pub fn role(&self) -> Role {
        derive_role(&self.public_metadata, &self.unsafe_metadata)
    }
}
