//! Endpoint schema entries.
//!
//! Each API operation is described by one const [`Endpoint`]: its name,
//! HTTP method, path template, authentication scheme and deprecation flag.
//! The generic [`ApiCall`](crate::apis::ApiCall) engine needs nothing else
//! to build and send the request.

use crate::auth::AuthScheme;
use crate::clients::HttpMethod;

/// A single operation of the Square API.
///
/// # Example
///
/// ```rust
/// use square_api::apis::Endpoint;
/// use square_api::auth::AuthScheme;
/// use square_api::clients::HttpMethod;
///
/// const RETRIEVE_WIDGET: Endpoint =
///     Endpoint::new("RetrieveWidget", HttpMethod::Get, "/v2/widgets/{id}");
///
/// assert_eq!(RETRIEVE_WIDGET.auth, Some(AuthScheme::Global));
/// assert!(!RETRIEVE_WIDGET.deprecated);
/// assert_eq!(RETRIEVE_WIDGET.path_params().collect::<Vec<_>>(), vec!["id"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Operation name, used in logs and validation errors.
    pub name: &'static str,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// Authentication scheme, or `None` for unauthenticated operations.
    pub auth: Option<AuthScheme>,
    /// Whether Square has deprecated the operation.
    pub deprecated: bool,
}

impl Endpoint {
    /// Creates an endpoint authenticated with the `global` scheme.
    #[must_use]
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            auth: Some(AuthScheme::Global),
            deprecated: false,
        }
    }

    /// Marks the endpoint as deprecated.
    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Removes the authentication requirement.
    #[must_use]
    pub const fn without_auth(mut self) -> Self {
        self.auth = None;
        self
    }

    /// Returns the placeholder names in the path template, in order.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('{')
            .skip(1)
            .filter_map(|segment| segment.split_once('}').map(|(name, _)| name))
    }
}
