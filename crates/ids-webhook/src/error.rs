use ids_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Classification of a store failure as seen by the delivery mechanism.
///
/// Transient failures are expected operational noise and safe to
/// redeliver; permanent failures will never succeed without a code or
/// schema fix and are logged as defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFailureKind {
    Transient,
    Permanent,
}

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Missing delivery header '{header}' {location}")]
    MissingHeader {
        header: &'static str,
        location: ErrorLocation,
    },

    #[error("Delivery signature verification failed {location}")]
    SignatureInvalid { location: ErrorLocation },

    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed notification payload: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store failure ({kind:?}): {source} {location}")]
    Store {
        kind: StoreFailureKind,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Store operation timed out after {elapsed_secs}s {location}")]
    StoreTimeout {
        elapsed_secs: u64,
        location: ErrorLocation,
    },
}

impl WebhookError {
    /// Whether the delivery mechanism should redeliver this notification.
    /// Idempotent resolution makes redelivery of transient failures safe.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreTimeout { .. }
                | Self::Store {
                    kind: StoreFailureKind::Transient,
                    ..
                }
        )
    }
}

/// Store errors are classified exactly once, here; callers never inspect
/// store-specific error codes.
impl From<DbError> for WebhookError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let kind = if source.is_transient() {
            StoreFailureKind::Transient
        } else {
            StoreFailureKind::Permanent
        };

        Self::Store {
            kind,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebhookError>;
