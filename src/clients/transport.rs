//! Pluggable HTTP transport.
//!
//! The [`Transport`] trait is the only suspension point in the request
//! pipeline. [`ReqwestTransport`] is the default implementation; tests and
//! callers with special networking needs can supply their own.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::errors::NetworkError;
use crate::clients::{HttpMethod, HttpRequest, HttpResponse};
use crate::error::ConfigError;

/// Sends a built request and returns the raw response.
///
/// Implementations must return any received status, including non-2xx
/// statuses, as `Ok`. Only failures to complete the round trip are errors.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use square_api::clients::{HttpRequest, HttpResponse, NetworkError, Transport};
/// use std::collections::HashMap;
///
/// #[derive(Debug)]
/// struct Canned;
///
/// #[async_trait]
/// impl Transport for Canned {
///     async fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
///         Ok(HttpResponse::new(200, HashMap::new(), "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] if the request could not be sent or the
    /// response could not be read.
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError>;
}

/// The default transport, backed by a pooled `reqwest` client using rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut req_builder = match request.method() {
            HttpMethod::Get => self.client.get(request.url()),
            HttpMethod::Post => self.client.post(request.url()),
            HttpMethod::Put => self.client.put(request.url()),
            HttpMethod::Delete => self.client.delete(request.url()),
        };

        for (name, value) in request.headers() {
            req_builder = req_builder.header(name, value);
        }

        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};
