//! Idempotency keys for write operations.
//!
//! Square deduplicates requests that carry the same `idempotency_key`, so a
//! create or pay request retried after a timeout or cancellation is applied
//! at most once. Any unique string of up to 45 characters is accepted.

use uuid::Uuid;

/// Generates a random version 4 UUID in its hyphenated lower-case form.
///
/// # Example
///
/// ```rust
/// use square_api::idempotency::new_idempotency_key;
///
/// let key = new_idempotency_key();
/// assert_eq!(key.len(), 36);
/// assert_eq!(key.as_bytes()[14], b'4');
/// assert_ne!(key, new_idempotency_key());
/// ```
#[must_use]
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}
