//! Webhook verification errors.

use thiserror::Error;

/// Error returned when a webhook signature cannot be checked.
///
/// A signature that simply does not match is not an error; see
/// [`is_valid_webhook_event_signature`](crate::webhooks::is_valid_webhook_event_signature).
///
/// ```rust
/// use square_api::webhooks::WebhookError;
///
/// let error = WebhookError::EmptySignatureKey;
/// assert!(error.to_string().contains("signature key"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The subscription's signature key was empty.
    #[error("Webhook signature key must not be empty")]
    EmptySignatureKey,

    /// The subscription's notification URL was empty.
    #[error("Webhook notification URL must not be empty")]
    EmptyNotificationUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_error_implements_std_error() {
        let error: &dyn std::error::Error = &WebhookError::EmptyNotificationUrl;
        assert!(error.to_string().contains("notification URL"));
    }

    #[test]
    fn test_webhook_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WebhookError>();
    }
}
