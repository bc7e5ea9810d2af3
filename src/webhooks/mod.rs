//! Webhook event notifications.
//!
//! Square delivers event notifications to the URL of a webhook subscription
//! and signs each one. Use [`is_valid_webhook_event_signature`] to check a
//! notification before trusting its body.
//!
//! ```rust,ignore
//! use square_api::webhooks::{is_valid_webhook_event_signature, SIGNATURE_HEADER};
//!
//! let signature = headers.get(SIGNATURE_HEADER).unwrap_or_default();
//! if !is_valid_webhook_event_signature(&body, signature, &signature_key, NOTIFICATION_URL)? {
//!     return StatusCode::FORBIDDEN;
//! }
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{compute_signature, is_valid_webhook_event_signature, SIGNATURE_HEADER};
