//! Current-identity REST handler

use crate::api::extractors::session::Session;
use crate::api::session::session_response::SessionResponse;
use crate::{ApiResult, AppState};

use ids_auth::SessionClaims;
use ids_core::Role;

use axum::{Json, extract::State};

/// GET /api/v1/session
///
/// Report who the current caller is. A valid session whose subject has no
/// stored record self-heals by creating one from the claims; a store
/// failure degrades to the provider-attached metadata role rather than
/// failing the request, since the next delivery or request reconciles.
pub async fn get_session(
    State(state): State<AppState>,
    Session(claims): Session,
) -> ApiResult<Json<SessionResponse>> {
    let Some(claims) = claims else {
        return Ok(Json(SessionResponse::Anonymous));
    };

    let response = match state
        .resolver()
        .ensure_record(&claims.sub, claims.email.as_deref(), claims.metadata_role())
        .await
    {
        Ok(Some(identity)) => SessionResponse::from(identity),
        Ok(None) => SessionResponse::provisional(claims.metadata_role(), claims.email.clone()),
        Err(e) => {
            log::warn!("Identity lookup failed for {}: {}", claims.sub, e);
            SessionResponse::provisional(claims.metadata_role(), claims.email.clone())
        }
    };

    Ok(Json(response))
}

/// Effective role of a possibly-anonymous caller. Prefers the stored
/// record; falls back to provider-attached metadata, then standard.
pub(crate) async fn effective_role(state: &AppState, claims: Option<&SessionClaims>) -> Role {
    let Some(claims) = claims else {
        return Role::Standard;
    };

    match state
        .resolver()
        .ensure_record(&claims.sub, claims.email.as_deref(), claims.metadata_role())
        .await
    {
        Ok(Some(identity)) => identity.role,
        Ok(None) => claims.metadata_role(),
        Err(e) => {
            log::warn!("Role lookup failed for {}: {}", claims.sub, e);
            claims.metadata_role()
        }
    }
}
