//! Delivery signature verification.
//!
//! The provider signs every delivery with HMAC-SHA256 over
//! `{id}.{timestamp}.{body}` under a shared secret, and sends the
//! signature alongside a delivery id and timestamp in dedicated headers.
//! Verification operates on the raw body bytes; the body is never parsed
//! or reserialized before the signature has passed.

use crate::{Result as WebhookErrorResult, WebhookError};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use error_location::ErrorLocation;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_DELIVERY_ID: &str = "svix-id";
pub const HEADER_DELIVERY_TIMESTAMP: &str = "svix-timestamp";
pub const HEADER_DELIVERY_SIGNATURE: &str = "svix-signature";

const SECRET_PREFIX: &str = "whsec_";
const SIGNATURE_VERSION_PREFIX: &str = "v1,";

/// The three mandatory out-of-band values of a delivery
#[derive(Debug, Clone, Copy)]
pub struct DeliveryHeaders<'a> {
    pub id: &'a str,
    pub timestamp: &'a str,
    pub signature: &'a str,
}

/// Verifies that an inbound notification originated from the provider.
/// Stateless beyond the decoded secret; deterministic given the same
/// inputs and clock window.
pub struct SignatureVerifier {
    secret: Vec<u8>,
    tolerance_secs: i64,
}

impl SignatureVerifier {
    /// Decode the shared signing secret. A missing or undecodable secret
    /// fails here, at construction, rather than silently passing requests
    /// later.
    #[track_caller]
    pub fn new(signing_secret: &str, tolerance_secs: u64) -> WebhookErrorResult<Self> {
        let encoded = signing_secret
            .strip_prefix(SECRET_PREFIX)
            .unwrap_or(signing_secret);

        if encoded.is_empty() {
            return Err(WebhookError::InvalidSecret {
                message: "signing secret is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let secret = BASE64
            .decode(encoded)
            .map_err(|e| WebhookError::InvalidSecret {
                message: format!("signing secret is not valid base64: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            secret,
            tolerance_secs: tolerance_secs as i64,
        })
    }

    /// Verify a delivery. Fails closed: a stale or future timestamp, an
    /// undecodable signature header, and a MAC mismatch all reject.
    #[track_caller]
    pub fn verify(&self, body: &[u8], headers: &DeliveryHeaders<'_>) -> WebhookErrorResult<()> {
        self.check_timestamp(headers.timestamp)?;

        let expected = self.compute(headers.id, headers.timestamp, body);

        // The signature header carries one space-separated candidate per
        // key version; any constant-time match passes.
        for candidate in headers.signature.split_ascii_whitespace() {
            let Some(encoded) = candidate.strip_prefix(SIGNATURE_VERSION_PREFIX) else {
                continue;
            };
            let Ok(decoded) = BASE64.decode(encoded) else {
                continue;
            };
            if decoded.len() == expected.len() && decoded.ct_eq(&expected).into() {
                return Ok(());
            }
        }

        Err(WebhookError::SignatureInvalid {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn compute(&self, id: &str, timestamp: &str, body: &[u8]) -> Vec<u8> {
        // new_from_slice only fails for unusable key lengths, which HMAC
        // does not have
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body);
        mac.finalize().into_bytes().to_vec()
    }

    #[track_caller]
    fn check_timestamp(&self, raw: &str) -> WebhookErrorResult<()> {
        let timestamp: i64 = raw.parse().map_err(|_| WebhookError::SignatureInvalid {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let skew = (Utc::now().timestamp() - timestamp).abs();
        if skew > self.tolerance_secs {
            return Err(WebhookError::SignatureInvalid {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
