//! Bearer token authentication.

use crate::auth::{AuthError, AuthScheme, Authenticator};
use crate::clients::HttpRequest;
use crate::config::AccessToken;

/// Attaches `Authorization: Bearer <token>` to requests.
///
/// # Example
///
/// ```rust
/// use square_api::auth::{Authenticator, BearerAuth};
/// use square_api::clients::{HttpMethod, HttpRequest};
/// use square_api::AccessToken;
///
/// let auth = BearerAuth::new(AccessToken::new("token").unwrap());
/// let request = HttpRequest::builder(HttpMethod::Get, "https://connect.squareup.com", "/v2/locations")
///     .build()
///     .unwrap();
///
/// let once = auth.apply(&request).unwrap();
/// let twice = auth.apply(&once).unwrap();
/// assert_eq!(once, twice);
/// ```
#[derive(Clone, Debug)]
pub struct BearerAuth {
    token: Option<AccessToken>,
}

impl BearerAuth {
    /// Creates an authenticator for the given token.
    #[must_use]
    pub const fn new(token: AccessToken) -> Self {
        Self { token: Some(token) }
    }

    /// Creates an authenticator from an optional token.
    ///
    /// With no token, [`Authenticator::apply`] fails with
    /// [`AuthError::MissingCredentials`].
    #[must_use]
    pub const fn from_token(token: Option<AccessToken>) -> Self {
        Self { token }
    }
}

impl Authenticator for BearerAuth {
    fn apply(&self, request: &HttpRequest) -> Result<HttpRequest, AuthError> {
        let scheme = AuthScheme::Global;
        let token = self
            .token
            .as_ref()
            .ok_or(AuthError::MissingCredentials { scheme })?;

        let value = format!("Bearer {}", token.as_ref());
        if reqwest::header::HeaderValue::from_str(&value).is_err() {
            return Err(AuthError::InvalidCredential { scheme });
        }

        Ok(request.with_header("authorization", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    fn request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, "https://connect.squareup.com", "/v2/locations")
            .header("Authorization", "Bearer stale")
            .build()
            .unwrap()
    }

    #[test]
    fn test_apply_overwrites_existing_authorization() {
        let auth = BearerAuth::new(AccessToken::new("fresh").unwrap());
        let authed = auth.apply(&request()).unwrap();

        assert_eq!(authed.header("authorization"), Some("Bearer fresh"));
        assert_eq!(
            authed.headers().keys().filter(|k| *k == "authorization").count(),
            1
        );
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let original = request();
        let auth = BearerAuth::new(AccessToken::new("fresh").unwrap());
        let _ = auth.apply(&original).unwrap();

        assert_eq!(original.header("authorization"), Some("Bearer stale"));
    }

    #[test]
    fn test_apply_twice_equals_apply_once() {
        let auth = BearerAuth::new(AccessToken::new("fresh").unwrap());
        let once = auth.apply(&request()).unwrap();
        let twice = auth.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_token_fails() {
        let auth = BearerAuth::from_token(None);
        assert_eq!(
            auth.apply(&request()).unwrap_err(),
            AuthError::MissingCredentials {
                scheme: AuthScheme::Global
            }
        );
    }

    #[test]
    fn test_token_with_newline_is_invalid() {
        let auth = BearerAuth::new(AccessToken::new("bad\ntoken").unwrap());
        assert_eq!(
            auth.apply(&request()).unwrap_err(),
            AuthError::InvalidCredential {
                scheme: AuthScheme::Global
            }
        );
    }
}
