use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Provider change notifications
        .route(
            "/webhooks/identity",
            post(crate::api::webhooks::webhooks::receive_identity_event),
        )
        // Identity surface consumed by the UI areas
        .route("/api/v1/session", get(crate::api::session::session::get_session))
        .route("/api/v1/redirect", get(crate::api::redirect::get_redirect))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the consumer apps live on sibling origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
