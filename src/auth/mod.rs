//! Authentication for the Square API SDK.
//!
//! Credentials are attached to a built request by an [`Authenticator`].
//! Each endpoint names the [`AuthScheme`] it requires, and the client
//! resolves that scheme through [`AuthManagers`], a map built once when the
//! client is constructed.
//!
//! # Overview
//!
//! - [`AuthScheme`]: The enumerated set of authentication schemes
//! - [`Authenticator`]: Applies credential material to a request
//! - [`BearerAuth`]: The `global` scheme, an OAuth or personal access token
//! - [`AuthManagers`]: Scheme to authenticator mapping
//! - [`AuthError`]: Failures raised while applying credentials
//!
//! # Overwrite Semantics
//!
//! Authenticators never mutate their input. They return a new request in
//! which the credential header is *replaced*, so applying the same
//! authenticator twice yields the same request as applying it once.
//!
//! # Example
//!
//! ```rust
//! use square_api::auth::{AuthManagers, AuthScheme};
//! use square_api::clients::{HttpMethod, HttpRequest};
//! use square_api::{AccessToken, SquareConfig};
//!
//! let config = SquareConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let managers = AuthManagers::from_config(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, config.base_uri(), "/v2/locations")
//!     .build()
//!     .unwrap();
//! let authed = managers.apply(AuthScheme::Global, &request).unwrap();
//!
//! assert_eq!(authed.header("authorization"), Some("Bearer my-token"));
//! assert!(request.header("authorization").is_none());
//! ```

mod bearer;
mod error;

pub use bearer::BearerAuth;
pub use error::AuthError;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::clients::HttpRequest;
use crate::config::SquareConfig;

/// An authentication scheme an endpoint can require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    /// Bearer token authentication, used by every Square endpoint.
    Global,
}

impl AuthScheme {
    /// Returns the scheme's name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies credential material to an outgoing request.
///
/// Implementations must be stateless given their credential snapshot and
/// must replace, not append, any header they set.
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Returns a copy of `request` with credentials attached.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if credential material is absent or invalid.
    fn apply(&self, request: &HttpRequest) -> Result<HttpRequest, AuthError>;
}

/// Mapping from [`AuthScheme`] to the [`Authenticator`] that implements it.
///
/// # Example
///
/// ```rust
/// use square_api::auth::{AuthManagers, AuthScheme, BearerAuth};
/// use square_api::AccessToken;
///
/// let managers = AuthManagers::new()
///     .with(AuthScheme::Global, BearerAuth::new(AccessToken::new("token").unwrap()));
///
/// assert!(managers.get(AuthScheme::Global).is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AuthManagers {
    managers: HashMap<AuthScheme, Arc<dyn Authenticator>>,
}

impl AuthManagers {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default mapping for a configuration.
    ///
    /// The `global` scheme is always registered. When the configuration has
    /// no access token, applying it fails with
    /// [`AuthError::MissingCredentials`].
    #[must_use]
    pub fn from_config(config: &SquareConfig) -> Self {
        Self::new().with(
            AuthScheme::Global,
            BearerAuth::from_token(config.access_token().cloned()),
        )
    }

    /// Registers an authenticator, replacing any existing one for the scheme.
    #[must_use]
    pub fn with(mut self, scheme: AuthScheme, authenticator: impl Authenticator + 'static) -> Self {
        self.managers.insert(scheme, Arc::new(authenticator));
        self
    }

    /// Returns the authenticator for a scheme.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SchemeNotConfigured`] if none is registered.
    pub fn get(&self, scheme: AuthScheme) -> Result<&Arc<dyn Authenticator>, AuthError> {
        self.managers
            .get(&scheme)
            .ok_or(AuthError::SchemeNotConfigured { scheme })
    }

    /// Applies the authenticator registered for `scheme`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the scheme is not registered or its
    /// authenticator fails.
    pub fn apply(&self, scheme: AuthScheme, request: &HttpRequest) -> Result<HttpRequest, AuthError> {
        self.get(scheme)?.apply(request)
    }
}

// Verify AuthManagers is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthManagers>();
};
