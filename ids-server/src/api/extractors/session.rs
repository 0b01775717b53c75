//! Axum extractors for request authentication

use crate::{ApiError, AppState};

use ids_auth::SessionClaims;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts validated session claims from the Authorization header.
///
/// Never rejects: a missing header, a non-Bearer scheme, a disabled
/// validator, and a failed validation all resolve to an anonymous
/// request. Whether anonymous is acceptable is the handler's decision.
pub struct Session(pub Option<SessionClaims>);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(validator) = state.session_validator.as_ref() else {
                return Ok(Session(None));
            };

            let Some(header) = parts
                .headers
                .get("authorization")
                .and_then(|h| h.to_str().ok())
            else {
                return Ok(Session(None));
            };

            let Some(token) = header.strip_prefix("Bearer ") else {
                log::warn!("Invalid authorization scheme: expected 'Bearer'");
                return Ok(Session(None));
            };

            match validator.validate(token) {
                Ok(claims) => Ok(Session(Some(claims))),
                Err(e) => {
                    log::warn!("Session validation failed: {}", e);
                    Ok(Session(None))
                }
            }
        }
    }
}
