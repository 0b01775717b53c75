pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

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

use ids_auth::SessionValidator;
use ids_webhook::SignatureVerifier;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = ids_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = ids_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ids-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/ids-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Delivery signature verifier; validate() guarantees the secret
    let signing_secret = config
        .webhook
        .signing_secret
        .as_deref()
        .unwrap_or_default();
    let verifier = Arc::new(SignatureVerifier::new(
        signing_secret,
        config.webhook.tolerance_secs,
    )?);
    info!("Webhook signature verifier initialized");

    // Create session validator (optional based on auth.enabled)
    let session_validator: Option<Arc<SessionValidator>> = if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            info!("Sessions: HS256 validation enabled");
            SessionValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let config_dir = ids_config::Config::config_dir()?;
            let full_path = config_dir.join(key_path);
            let public_key = std::fs::read_to_string(&full_path).map_err(|e| {
                error::ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                }
            })?;
            info!("Sessions: RS256 validation enabled");
            SessionValidator::with_rs256(&public_key)?
        } else {
            unreachable!("validate() ensures JWT config when auth.enabled")
        };
        Some(Arc::new(validator))
    } else {
        warn!("Session validation DISABLED - every request resolves as anonymous");
        None
    };

    // Build application state
    let app_state = AppState {
        pool,
        verifier,
        session_validator,
        store_timeout: Duration::from_secs(config.webhook.store_timeout_secs),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept deliveries");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
