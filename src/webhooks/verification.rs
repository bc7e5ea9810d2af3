//! Webhook signature verification.
//!
//! Square signs each event notification with the subscription's signature
//! key. The signature is the base64-encoded HMAC-SHA256 of the notification
//! URL followed by the raw request body, sent in the
//! [`SIGNATURE_HEADER`] header.
//!
//! # Example
//!
//! ```rust
//! use square_api::webhooks::{compute_signature, is_valid_webhook_event_signature};
//!
//! let url = "https://example.com/webhooks/square";
//! let body = r#"{"merchant_id":"MLEFBHHSJGVHD","type":"payment.created"}"#;
//! let signature = compute_signature("sig-key", url, body.as_bytes());
//!
//! assert!(is_valid_webhook_event_signature(body, &signature, "sig-key", url).unwrap());
//! assert!(!is_valid_webhook_event_signature(body, &signature, "other-key", url).unwrap());
//! ```
//!
//! # Security
//!
//! Signatures are compared in constant time. The body must be the exact bytes
//! received: re-serializing parsed JSON changes the signature.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the notification signature, lower-cased.
pub const SIGNATURE_HEADER: &str = "x-square-hmacsha256-signature";

/// Computes the base64 signature Square sends for a notification.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(signature_key: &str, notification_url: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(signature_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(notification_url.as_bytes());
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Checks the signature of a webhook event notification.
///
/// # Arguments
///
/// * `body` - The raw request body
/// * `signature_header` - Value of the [`SIGNATURE_HEADER`] header
/// * `signature_key` - The subscription's signature key
/// * `notification_url` - The subscription's notification URL, exactly as registered
///
/// Returns `Ok(false)` when the header is empty or the signature does not match.
///
/// # Errors
///
/// Returns [`WebhookError`] if `signature_key` or `notification_url` is empty.
pub fn is_valid_webhook_event_signature(
    body: &str,
    signature_header: &str,
    signature_key: &str,
    notification_url: &str,
) -> Result<bool, WebhookError> {
    if signature_key.is_empty() {
        return Err(WebhookError::EmptySignatureKey);
    }
    if notification_url.is_empty() {
        return Err(WebhookError::EmptyNotificationUrl);
    }
    if signature_header.is_empty() {
        return Ok(false);
    }

    let expected = compute_signature(signature_key, notification_url, body.as_bytes());
    let valid = constant_time_compare(&expected, signature_header);
    if !valid {
        tracing::debug!(notification_url, "Webhook signature mismatch");
    }
    Ok(valid)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
