//! Error types for the request pipeline.
//!
//! Every API call returns a [`SquareError`] on failure. Each variant maps to
//! one stage of the pipeline:
//!
//! - [`SquareError::Validation`]: caller input rejected before any network activity
//! - [`SquareError::Authentication`]: credentials missing or not configured
//! - [`SquareError::Network`]: the transport could not complete the round trip
//! - [`SquareError::Api`]: Square returned a non-2xx status
//! - [`SquareError::Decode`]: a 2xx body did not match the expected model
//! - [`SquareError::Cancelled`]: the caller cancelled the call before a response was read
//! - [`SquareError::Config`]: the client could not set up what a blocking call needs
//!
//! No stage retries. A failure is never turned into a default model.
//!
//! # Example
//!
//! ```rust,ignore
//! use square_api::clients::{ApiErrorKind, SquareError};
//!
//! match client.orders().retrieve_order("missing").send().await {
//!     Ok(response) => println!("Order: {:?}", response.order),
//!     Err(SquareError::Api(e)) if e.kind() == ApiErrorKind::NotFound => {
//!         println!("Not found: {}", e.detail().unwrap_or_default());
//!     }
//!     Err(SquareError::Cancelled) => println!("Cancelled"),
//!     Err(e) => println!("Failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::HttpContext;
use crate::error::{ConfigError, ValidationError};

/// One entry from the `errors` array of a Square error body.
///
/// `category` and `code` are kept as strings so values added by Square
/// after this SDK was released still decode.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// High-level category, such as `INVALID_REQUEST_ERROR`.
    pub category: String,
    /// Specific error code, such as `NOT_FOUND`.
    pub code: String,
    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The request field the error refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

/// Status-code classification of an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 429
    RateLimited,
    /// 500-599
    Server,
    /// Any other non-2xx status.
    Other,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use square_api::clients::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
    /// assert_eq!(ApiErrorKind::from_status(503), ApiErrorKind::Server);
    /// assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Other);
    /// ```
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::RateLimited => "rate limited",
            Self::Server => "server error",
            Self::Other => "unexpected status",
        };
        f.write_str(name)
    }
}

/// Error returned when Square responds with a non-2xx status.
///
/// Carries the status, the decoded error entries (empty when the body is not
/// a Square error body) and the full call context.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: u16,
    kind: ApiErrorKind,
    errors: Vec<ErrorEntry>,
    message: String,
    context: Box<HttpContext>,
}

impl ApiError {
    /// Builds an error from a completed call whose response is not 2xx.
    #[must_use]
    pub fn from_context(context: HttpContext) -> Self {
        let status = context.response().code;
        let kind = ApiErrorKind::from_status(status);
        let errors = serde_json::from_str::<ErrorBody>(&context.response().body)
            .map(|body| body.errors)
            .unwrap_or_default();

        let summary = errors
            .iter()
            .map(|entry| entry.detail.as_deref().unwrap_or(&entry.code))
            .collect::<Vec<_>>()
            .join("; ");
        let message = if summary.is_empty() {
            format!("HTTP {status} ({kind})")
        } else {
            format!("HTTP {status} ({kind}): {summary}")
        };

        Self {
            status,
            kind,
            errors,
            message,
            context: Box::new(context),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the status classification.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the decoded error entries.
    #[must_use]
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Returns the detail of the first error entry, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.errors.first().and_then(|entry| entry.detail.as_deref())
    }

    /// Returns the request and raw response.
    #[must_use]
    pub fn context(&self) -> &HttpContext {
        &self.context
    }
}

/// Classification of a [`NetworkError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkErrorKind {
    /// The request or response did not complete within the configured timeout.
    Timeout,
    /// A connection could not be established (DNS, TCP or TLS).
    Connect,
    /// Any other transport failure, including reading the body.
    Other,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout"),
            Self::Connect => f.write_str("connect"),
            Self::Other => f.write_str("transport"),
        }
    }
}

/// Error returned when the transport fails to complete the round trip.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Network error ({kind}): {message}")]
pub struct NetworkError {
    /// The failure classification.
    pub kind: NetworkErrorKind,
    /// The underlying error message.
    pub message: String,
}

impl NetworkError {
    /// Creates a new network error.
    #[must_use]
    pub fn new(kind: NetworkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            NetworkErrorKind::Timeout
        } else if error.is_connect() {
            NetworkErrorKind::Connect
        } else {
            NetworkErrorKind::Other
        };
        Self::new(kind, error.to_string())
    }
}

/// Error returned when a 2xx body cannot be decoded into the expected model.
#[derive(Debug, Error)]
#[error("Failed to decode response as {type_name}: {message}")]
pub struct DecodeError {
    type_name: &'static str,
    message: String,
    context: Box<HttpContext>,
}

impl DecodeError {
    /// Creates a decode error for the given target type.
    #[must_use]
    pub fn new(type_name: &'static str, error: &serde_json::Error, context: HttpContext) -> Self {
        Self {
            type_name,
            message: error.to_string(),
            context: Box::new(context),
        }
    }

    /// Returns the name of the type the body was decoded into.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the request and raw response.
    #[must_use]
    pub fn context(&self) -> &HttpContext {
        &self.context
    }
}

/// Unified error type for every API call.
#[derive(Debug, Error)]
pub enum SquareError {
    /// Caller input was rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credentials were missing or the scheme was not configured.
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// The transport failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Square returned a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success body did not match the expected model.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The call was cancelled before a response was read.
    #[error("The request was cancelled before a response was received.")]
    Cancelled,

    /// Client setup failed, for example the blocking runtime could not start.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SquareError {
    /// Returns the HTTP status for [`SquareError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status),
            _ => None,
        }
    }

    /// Returns `true` if the call was cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<NetworkError>();
    assert_send_sync::<DecodeError>();
    assert_send_sync::<SquareError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
    use std::collections::HashMap;

    fn context(status: u16, body: &str) -> HttpContext {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            "https://connect.squareup.com",
            "/v2/widgets/{id}",
        )
        .path_param("id", "abc")
        .build()
        .unwrap();
        HttpContext::new(request, HttpResponse::new(status, HashMap::new(), body))
    }

    #[test]
    fn test_status_to_kind_mapping() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::BadRequest);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(429), ApiErrorKind::RateLimited);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(599), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(402), ApiErrorKind::Other);
        assert_eq!(ApiErrorKind::from_status(302), ApiErrorKind::Other);
    }

    #[test]
    fn test_api_error_decodes_entries() {
        let error = ApiError::from_context(context(
            404,
            r#"{"errors":[{"category":"INVALID_REQUEST","code":"NOT_FOUND","detail":"no such widget"}]}"#,
        ));

        assert_eq!(error.status(), 404);
        assert_eq!(error.kind(), ApiErrorKind::NotFound);
        assert_eq!(error.detail(), Some("no such widget"));
        assert_eq!(
            error.errors(),
            &[ErrorEntry {
                category: "INVALID_REQUEST".to_string(),
                code: "NOT_FOUND".to_string(),
                detail: Some("no such widget".to_string()),
                field: None,
            }]
        );
        assert_eq!(error.to_string(), "HTTP 404 (not found): no such widget");
        assert_eq!(error.context().request().path(), "/v2/widgets/abc");
    }

    #[test]
    fn test_api_error_with_undecodable_body_has_no_entries() {
        let error = ApiError::from_context(context(502, "<html>Bad Gateway</html>"));

        assert_eq!(error.status(), 502);
        assert_eq!(error.kind(), ApiErrorKind::Server);
        assert!(error.errors().is_empty());
        assert!(error.detail().is_none());
        assert_eq!(error.to_string(), "HTTP 502 (server error)");
    }

    #[test]
    fn test_api_error_message_falls_back_to_code() {
        let error = ApiError::from_context(context(
            400,
            r#"{"errors":[{"category":"INVALID_REQUEST_ERROR","code":"MISSING_REQUIRED_PARAMETER","field":"order_ids"}]}"#,
        ));

        assert_eq!(error.errors()[0].field.as_deref(), Some("order_ids"));
        assert!(error.to_string().contains("MISSING_REQUIRED_PARAMETER"));
    }

    #[test]
    fn test_square_error_status_and_cancelled() {
        let api: SquareError = ApiError::from_context(context(429, "")).into();
        assert_eq!(api.status(), Some(429));
        assert!(!api.is_cancelled());

        assert!(SquareError::Cancelled.is_cancelled());
        assert_eq!(SquareError::Cancelled.status(), None);
    }

    #[test]
    fn test_runtime_failure_is_a_config_error() {
        let error: SquareError = ConfigError::RuntimeInit {
            reason: "no threads".to_string(),
        }
        .into();

        assert!(matches!(
            error,
            SquareError::Config(ConfigError::RuntimeInit { .. })
        ));
        assert_eq!(
            error.to_string(),
            "Failed to start the runtime for blocking calls: no threads"
        );
    }

    #[test]
    fn test_network_error_display() {
        let error = NetworkError::new(NetworkErrorKind::Timeout, "operation timed out");
        assert_eq!(
            error.to_string(),
            "Network error (timeout): operation timed out"
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &SquareError::Cancelled;
        let _: &dyn std::error::Error = &NetworkError::new(NetworkErrorKind::Other, "x");
    }
}
