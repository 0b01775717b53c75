//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. The webhook endpoint relies on
//! the mapping here: the provider redelivers on any non-2xx status, so
//! transient store failures must map to a retryable status while
//! signature failures must not reach the store at all.

use ids_auth::AuthError;
use ids_db::DbError;
use ids_webhook::{StoreFailureKind, WebhookError};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "SIGNATURE_INVALID")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected delivery or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Retryable failure; the caller should redeliver (503)
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Unavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, "RETRY_LATER"),
            ApiError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        // Permanent failures are defects; everything else is expected
        // operational noise
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let message = match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Unavailable { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody {
                    code: code.into(),
                    message,
                },
            }),
        )
            .into_response()
    }
}

/// Map webhook-processing errors onto delivery responses
impl From<WebhookError> for ApiError {
    #[track_caller]
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::MissingHeader { .. } | WebhookError::SignatureInvalid { .. } => {
                ApiError::Unauthorized {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            WebhookError::Payload { .. } => ApiError::BadRequest {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::StoreTimeout { .. }
            | WebhookError::Store {
                kind: StoreFailureKind::Transient,
                ..
            } => ApiError::Unavailable {
                message: "Store temporarily unavailable; redeliver".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            WebhookError::InvalidSecret { .. }
            | WebhookError::Store {
                kind: StoreFailureKind::Permanent,
                ..
            } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert session validation errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        if e.is_transient() {
            ApiError::Unavailable {
                message: "Store temporarily unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
