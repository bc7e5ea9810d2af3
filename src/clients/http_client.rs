//! HTTP client for Square API communication.
//!
//! This module provides the [`HttpClient`] type, which owns everything a call
//! needs besides its endpoint: the base URI, the default headers, the
//! authentication map, the transport and the optional callback.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::auth::{AuthManagers, AuthScheme};
use crate::clients::errors::{ApiError, SquareError};
use crate::clients::{
    HttpCallback, HttpContext, HttpMethod, HttpRequest, HttpRequestBuilder, Transport,
};
use crate::config::SquareConfig;

/// HTTP client for making requests to the Square API.
///
/// The client handles:
/// - Base URI selection from the configured environment
/// - Default headers (`accept`, `square-version`, `user-agent` and any
///   additional headers from the configuration)
/// - Credential injection through [`AuthManagers`]
/// - Status validation, mapping non-2xx responses to [`ApiError`]
/// - Cooperative cancellation while waiting on the transport
///
/// It never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_uri: String,
    default_headers: BTreeMap<String, String>,
    transport: Arc<dyn Transport>,
    auth: AuthManagers,
    callback: Option<Arc<dyn HttpCallback>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the base URI and default headers
    /// * `transport` - Executes requests
    /// * `auth` - Resolves authentication schemes to authenticators
    /// * `callback` - Optional observer invoked around each call
    #[must_use]
    pub fn new(
        config: &SquareConfig,
        transport: Arc<dyn Transport>,
        auth: AuthManagers,
        callback: Option<Arc<dyn HttpCallback>>,
    ) -> Self {
        let mut default_headers = BTreeMap::new();
        for (name, value) in config.additional_headers() {
            default_headers.insert(name.clone(), value.clone());
        }
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "square-version".to_string(),
            config.square_version().to_string(),
        );
        default_headers.insert("user-agent".to_string(), config.user_agent());

        Self {
            base_uri: config.base_uri().to_string(),
            default_headers,
            transport,
            auth,
            callback,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// Starts a request against this client's base URI with default headers set.
    #[must_use]
    pub fn request_builder(&self, method: HttpMethod, template: &'static str) -> HttpRequestBuilder {
        HttpRequest::builder(method, self.base_uri.as_str(), template).headers(&self.default_headers)
    }

    /// Authenticates, sends and validates a request.
    ///
    /// Returns the call context for 2xx responses.
    ///
    /// # Errors
    ///
    /// - [`SquareError::Authentication`] if `auth` is set and credentials
    ///   cannot be applied; the transport is not invoked
    /// - [`SquareError::Cancelled`] if `cancel` fires before the response is read
    /// - [`SquareError::Network`] if the transport fails
    /// - [`SquareError::Api`] for non-2xx statuses
    pub async fn execute(
        &self,
        request: HttpRequest,
        auth: Option<AuthScheme>,
        cancel: Option<&CancellationToken>,
    ) -> Result<HttpContext, SquareError> {
        if let Some(callback) = &self.callback {
            callback.on_before_request(&request);
        }

        let request = match auth {
            Some(scheme) => self.auth.apply(scheme, &request)?,
            None => request,
        };

        tracing::debug!(method = %request.method(), url = request.url(), "Sending request to Square API");

        let response = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!(url = request.url(), "Request cancelled before a response was read");
                        return Err(SquareError::Cancelled);
                    }
                    result = self.transport.execute(&request) => result?,
                }
            }
            None => self.transport.execute(&request).await?,
        };

        tracing::debug!(status = response.code, url = request.url(), "Received response from Square API");

        let context = HttpContext::new(request, response);
        if let Some(callback) = &self.callback {
            callback.on_after_response(&context);
        }

        if context.response().is_ok() {
            return Ok(context);
        }

        let error = ApiError::from_context(context);
        tracing::debug!(
            status = error.status(),
            kind = %error.kind(),
            "Square API returned an error response"
        );
        Err(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, NetworkError};
    use crate::config::{AccessToken, SquareVersion};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        status: u16,
        requests: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(self.status, HashMap::new(), "{}"))
        }
    }

    fn config() -> SquareConfig {
        SquareConfig::builder()
            .access_token(AccessToken::new("test-token").unwrap())
            .square_version(SquareVersion::new("2023-12-13").unwrap())
            .additional_header("X-Extra", "1")
            .build()
            .unwrap()
    }

    fn client(transport: Arc<RecordingTransport>) -> HttpClient {
        let config = config();
        HttpClient::new(&config, transport, AuthManagers::from_config(&config), None)
    }

    #[test]
    fn test_default_headers() {
        let client = client(Arc::new(RecordingTransport::default()));
        let headers = client.default_headers();

        assert_eq!(headers.get("accept").unwrap(), "application/json");
        assert_eq!(headers.get("square-version").unwrap(), "2023-12-13");
        assert!(headers
            .get("user-agent")
            .unwrap()
            .starts_with("Square-Rust-SDK/"));
        assert_eq!(headers.get("x-extra").unwrap(), "1");
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[tokio::test]
    async fn test_execute_attaches_authorization() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            ..Default::default()
        });
        let client = client(transport.clone());
        let request = client
            .request_builder(HttpMethod::Get, "/v2/locations")
            .build()
            .unwrap();

        let context = client
            .execute(request, Some(AuthScheme::Global), None)
            .await
            .unwrap();

        assert_eq!(
            context.request().header("authorization"),
            Some("Bearer test-token")
        );
        assert_eq!(transport.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_maps_non_2xx_to_api_error() {
        let transport = Arc::new(RecordingTransport {
            status: 503,
            ..Default::default()
        });
        let client = client(transport);
        let request = client
            .request_builder(HttpMethod::Get, "/v2/locations")
            .build()
            .unwrap();

        let error = client.execute(request, None, None).await.unwrap_err();
        assert_eq!(error.status(), Some(503));
    }

    #[tokio::test]
    async fn test_execute_with_cancelled_token_skips_transport() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            ..Default::default()
        });
        let client = client(transport.clone());
        let request = client
            .request_builder(HttpMethod::Get, "/v2/locations")
            .build()
            .unwrap();

        let token = CancellationToken::new();
        token.cancel();

        let error = client
            .execute(request, Some(AuthScheme::Global), Some(&token))
            .await
            .unwrap_err();

        assert!(error.is_cancelled());
        assert!(transport.requests.lock().unwrap().is_empty());
    }
}
