#![allow(dead_code)]

use ids_core::{Identity, Role};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection or each checkout sees a
    // different empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Builds an identity with provider-shaped test data
pub fn make_identity(external_id: &str, email: &str, role: Role) -> Identity {
    let mut identity = Identity::new(Some(external_id.to_string()), email.to_string(), role);
    identity.display_name = Some("Test User".to_string());
    identity
}
