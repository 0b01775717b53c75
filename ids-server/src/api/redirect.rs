//! Post-authentication redirect resolution
//!
//! Computes the single canonical path a caller should land on once their
//! role is known, honoring an explicit "continue to" path when it is safe
//! and an ambient studio-flow hint for standard users.

use crate::api::extractors::session::Session;
use crate::api::session::session::effective_role;
use crate::{ApiResult, AppState};

use ids_core::Role;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

pub const SITE_ROOT: &str = "/";
pub const VENDOR_PORTAL_ROOT: &str = "/vendor";
pub const ADMIN_PANEL_ROOT: &str = "/admin";
pub const STUDIO_ROOT: &str = "/studio";

const SIGN_IN_PATH: &str = "/login";
const SIGN_UP_PATH: &str = "/signup";
const VERIFY_EMAIL_PATH: &str = "/verify-email";

/// The pending-flow marker the studio site stores client-side
const STUDIO_FLOW_HINT: &str = "studio";

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the destination path for a caller.
///
/// Decision order:
/// 1. An explicit continue path wins when it is a same-origin relative
///    path and does not target the admin area or an auth page. Bouncing a
///    caller back into the sign-in flow it just completed, or into an
///    area its role gates separately, is never the right answer.
/// 2. Otherwise the role default applies. A standard-role caller whose
///    flow originated in the studio sub-application (stored hint or
///    current path prefix) lands on the studio root instead of the site
///    root; vendor and admin homes are never overridden by ambient
///    context.
pub fn resolve_redirect(
    role: Role,
    continue_path: Option<&str>,
    ambient_hint: Option<&str>,
) -> String {
    if let Some(path) = continue_path
        && is_safe_continue_path(path)
    {
        return path.to_string();
    }

    match role {
        Role::Vendor => VENDOR_PORTAL_ROOT.to_string(),
        Role::Admin => ADMIN_PANEL_ROOT.to_string(),
        Role::Standard => {
            if is_studio_flow(ambient_hint) {
                STUDIO_ROOT.to_string()
            } else {
                SITE_ROOT.to_string()
            }
        }
    }
}

/// Same-origin relative path that is not a sensitive or circular
/// destination
fn is_safe_continue_path(path: &str) -> bool {
    // "//host" is protocol-relative and leaves the origin; backslashes
    // are browser-normalized into separators
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return false;
    }

    !is_sensitive_destination(path)
}

fn is_sensitive_destination(path: &str) -> bool {
    let path = path_portion(path);

    [
        ADMIN_PANEL_ROOT,
        SIGN_IN_PATH,
        SIGN_UP_PATH,
        VERIFY_EMAIL_PATH,
    ]
    .iter()
    .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

fn is_studio_flow(ambient_hint: Option<&str>) -> bool {
    let Some(hint) = ambient_hint else {
        return false;
    };

    if hint == STUDIO_FLOW_HINT {
        return true;
    }

    let path = path_portion(hint);
    path == STUDIO_ROOT || path.starts_with(&format!("{}/", STUDIO_ROOT))
}

/// Path without query or fragment
fn path_portion(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

// =============================================================================
// Handler
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    pub continue_path: Option<String>,
    /// Ambient context hint: the stored pending-flow marker or the path
    /// the caller is currently on
    pub flow: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub destination: String,
}

/// GET /api/v1/redirect
///
/// Resolve the destination for the current identity. Anonymous callers
/// resolve with the standard role.
pub async fn get_redirect(
    State(state): State<AppState>,
    Session(claims): Session,
    Query(query): Query<RedirectQuery>,
) -> ApiResult<Json<RedirectResponse>> {
    let role = effective_role(&state, claims.as_ref()).await;

    let destination = resolve_redirect(
        role,
        query.continue_path.as_deref(),
        query.flow.as_deref(),
    );

    Ok(Json(RedirectResponse { destination }))
}
