//! Authentication error types.

use thiserror::Error;

use crate::auth::AuthScheme;

/// Errors raised while applying credentials to a request.
///
/// These are always raised before the request reaches the transport.
///
/// # Example
///
/// ```rust
/// use square_api::auth::{AuthError, AuthScheme};
///
/// let error = AuthError::MissingCredentials { scheme: AuthScheme::Global };
/// assert!(error.to_string().contains("global"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The scheme is configured but has no credential material.
    #[error("No credentials configured for the '{scheme}' authentication scheme. Set an access token on the SquareConfig.")]
    MissingCredentials {
        /// The scheme that was applied.
        scheme: AuthScheme,
    },

    /// No authenticator is registered for the scheme.
    #[error("No authenticator registered for the '{scheme}' authentication scheme.")]
    SchemeNotConfigured {
        /// The scheme that was requested.
        scheme: AuthScheme,
    },

    /// The credential cannot be represented as an HTTP header value.
    #[error("The credential for the '{scheme}' authentication scheme is not a valid header value.")]
    InvalidCredential {
        /// The scheme that was applied.
        scheme: AuthScheme,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
