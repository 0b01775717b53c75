use ids_auth::SessionValidator;
use ids_db::IdentityRepository;
use ids_webhook::{IdentityResolver, SignatureVerifier};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared application state for request handlers.
///
/// Populated once at startup from validated configuration and never
/// mutated in place; per-request identity context is derived from it by
/// the extractors, not stored on it.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub verifier: Arc<SignatureVerifier>,
    /// None disables session validation (development mode); every request
    /// then resolves as anonymous
    pub session_validator: Option<Arc<SessionValidator>>,
    pub store_timeout: Duration,
}

impl AppState {
    /// Resolver over the shared pool; cheap to construct per request
    pub fn resolver(&self) -> IdentityResolver {
        IdentityResolver::new(IdentityRepository::new(self.pool.clone()), self.store_timeout)
    }
}
