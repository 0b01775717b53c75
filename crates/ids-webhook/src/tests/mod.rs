
use crate::IdentityResolver;

use ids_db::IdentityRepository;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../ids-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) fn make_resolver(pool: SqlitePool) -> IdentityResolver {
    IdentityResolver::new(IdentityRepository::new(pool), Duration::from_secs(5))
}
