//! Identity webhook REST handler
//!
//! The single ingress for provider change notifications. The 2xx/non-2xx
//! contract matters: the provider only stops redelivering once we return
//! 2xx, so success is reported strictly after the store mutation has
//! completed (or the notification was classified as ignorable).

use crate::api::webhooks::webhook_ack::WebhookAck;
use crate::{ApiResult, AppState};

use ids_core::IdentityEvent;
use ids_webhook::{
    DeliveryHeaders, HEADER_DELIVERY_ID, HEADER_DELIVERY_SIGNATURE, HEADER_DELIVERY_TIMESTAMP,
    WebhookError,
};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use bytes::Bytes;
use error_location::ErrorLocation;

/// POST /webhooks/identity
///
/// Verification runs over the raw body bytes before anything parses
/// them; a request that fails verification never touches the store.
pub async fn receive_identity_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<WebhookAck>> {
    let delivery = DeliveryHeaders {
        id: required_header(&headers, HEADER_DELIVERY_ID)?,
        timestamp: required_header(&headers, HEADER_DELIVERY_TIMESTAMP)?,
        signature: required_header(&headers, HEADER_DELIVERY_SIGNATURE)?,
    };

    state.verifier.verify(&body, &delivery)?;

    let event: IdentityEvent =
        serde_json::from_slice(&body).map_err(|e| WebhookError::Payload {
            message: format!("notification body is not valid JSON: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!(
        "Delivery {} verified (type: {})",
        delivery.id,
        event.event_type
    );

    ids_webhook::dispatch(&event, &state.resolver()).await?;

    Ok(Json(WebhookAck { received: true }))
}

#[track_caller]
fn required_header<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
) -> Result<&'a str, WebhookError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| WebhookError::MissingHeader {
            header: name,
            location: ErrorLocation::from(Location::caller()),
        })
}
