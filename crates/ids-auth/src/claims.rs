use crate::{AuthError, Result as AuthErrorResult};

use ids_core::{Role, TrustedMetadata, derive_role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims issued by the identity provider.
///
/// The provider embeds the trusted metadata tier in the session token, so
/// every authenticated request can re-derive its role without a store
/// read; the store is only consulted for the full identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the provider-assigned identity id
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Primary email, present when the token template includes it
    #[serde(default)]
    pub email: Option<String>,
    /// Trusted metadata tier attached by the provider
    #[serde(default)]
    pub public_metadata: TrustedMetadata,
}

impl SessionClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (external identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Role according to the provider-attached metadata alone.
    /// Used when no store record exists yet (or the store is unreachable);
    /// the untrusted tier is never embedded in session tokens, so only the
    /// trusted tier applies here.
    pub fn metadata_role(&self) -> Role {
        derive_role(&self.public_metadata, &Default::default())
    }
}
