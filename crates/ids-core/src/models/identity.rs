//! Identity record - the internally-owned mirror of a provider identity.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row in the identity store.
///
/// `id` is generated locally and never changes. `external_id` is assigned
/// by the identity provider and may be rebound to this record through the
/// email-conflict path in the resolver; `email` is the fallback
/// correlation key and is unique across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub external_id: Option<String>,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new record with default values
    pub fn new(external_id: Option<String>, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            external_id,
            email,
            display_name: None,
            avatar_url: None,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_vendor(&self) -> bool {
        self.role == Role::Vendor
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
