#![allow(dead_code)]

//! Test infrastructure for ids-server API tests

use ids_auth::{SessionClaims, SessionValidator};
use ids_core::TrustedMetadata;
use ids_server::AppState;
use ids_webhook::SignatureVerifier;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sha2::Sha256;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const SIGNING_SECRET_BYTES: &[u8] = b"integration-test-signing-secret!";
pub const SESSION_SECRET: &[u8] = b"test-session-secret-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/ids-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let signing_secret = format!("whsec_{}", BASE64.encode(SIGNING_SECRET_BYTES));
    let verifier = SignatureVerifier::new(&signing_secret, 300).expect("verifier should build");

    AppState {
        pool,
        verifier: Arc::new(verifier),
        session_validator: Some(Arc::new(SessionValidator::with_hs256(SESSION_SECRET))),
        store_timeout: Duration::from_secs(5),
    }
}

/// Sign a delivery the way the provider does
pub fn sign_delivery(id: &str, timestamp: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(SIGNING_SECRET_BYTES).unwrap();
    mac.update(format!("{}.{}.", id, timestamp).as_bytes());
    mac.update(body);
    format!("v1,{}", BASE64.encode(mac.finalize().into_bytes()))
}

/// Build a correctly-signed webhook request
pub fn delivery_request(delivery_id: &str, body: &str) -> Request<Body> {
    let timestamp = chrono::Utc::now().timestamp().to_string();
    let signature = sign_delivery(delivery_id, &timestamp, body.as_bytes());

    Request::builder()
        .method("POST")
        .uri("/webhooks/identity")
        .header("svix-id", delivery_id)
        .header("svix-timestamp", timestamp)
        .header("svix-signature", signature)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Issue a session token for the test validator
pub fn make_token(sub: &str, email: Option<&str>, metadata_role: Option<&str>) -> String {
    let claims = SessionClaims {
        sub: sub.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        email: email.map(String::from),
        public_metadata: TrustedMetadata {
            role: metadata_role.map(String::from),
        },
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SESSION_SECRET),
    )
    .unwrap()
}

/// A created notification body for the given identity
pub fn created_body(external_id: &str, email: &str) -> String {
    format!(
        r#"{{
            "type": "user.created",
            "data": {{
                "id": "{external_id}",
                "email_addresses": [{{"id": "idn_1", "email_address": "{email}"}}],
                "primary_email_address_id": "idn_1",
                "first_name": "Dana",
                "last_name": "Reyes"
            }}
        }}"#
    )
}
