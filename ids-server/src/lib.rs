pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::Session,
    redirect::{
        ADMIN_PANEL_ROOT, RedirectQuery, RedirectResponse, SITE_ROOT, STUDIO_ROOT,
        VENDOR_PORTAL_ROOT, get_redirect, resolve_redirect,
    },
    session::{session::get_session, session_response::SessionResponse},
    webhooks::{webhook_ack::WebhookAck, webhooks::receive_identity_event},
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
