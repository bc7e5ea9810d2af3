//! HTTP request types for the Square API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Square API. Building a request is pure: it
//! substitutes path parameters, encodes the query string and attaches
//! headers, but never touches the network.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ValidationError;

/// Content type sent with every JSON request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP methods used by the Square API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running searches.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-built HTTP request.
///
/// Requests are immutable; [`HttpRequest::with_header`] returns a modified
/// copy. Header names are stored lower-case.
///
/// # Example
///
/// ```rust
/// use square_api::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://connect.squareup.com", "/v2/widgets/{id}")
///     .path_param("id", "abc")
///     .query_param("limit", Some(10))
///     .query_param("cursor", None::<String>)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "/v2/widgets/abc");
/// assert_eq!(request.url(), "https://connect.squareup.com/v2/widgets/abc?limit=10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    path: String,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method for the request
    /// * `base_uri` - Scheme and host, without a trailing slash
    /// * `template` - Path template with `{name}` placeholders
    #[must_use]
    pub fn builder(
        method: HttpMethod,
        base_uri: impl Into<String>,
        template: &'static str,
    ) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, base_uri, template)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the full URL including the encoded query string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the path with parameters substituted.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters, sorted by key.
    #[must_use]
    pub const fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns all headers, keyed by lower-case name.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Returns the serialized JSON body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns a copy of this request with the header set.
    ///
    /// An existing header with the same name is replaced.
    #[must_use]
    pub fn with_header(&self, name: &str, value: impl Into<String>) -> Self {
        let mut request = self.clone();
        request.headers.insert(name.to_lowercase(), value.into());
        request
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    base_uri: String,
    template: &'static str,
    operation: &'static str,
    path_params: Vec<(String, String)>,
    query: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, base_uri: impl Into<String>, template: &'static str) -> Self {
        Self {
            method,
            base_uri: base_uri.into(),
            template,
            operation: template,
            path_params: Vec::new(),
            query: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets the operation name reported in validation errors.
    #[must_use]
    pub const fn operation(mut self, name: &'static str) -> Self {
        self.operation = name;
        self
    }

    /// Binds a `{name}` placeholder in the path template.
    #[must_use]
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.path_params.retain(|(existing, _)| existing != &name);
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter. `None` values are omitted from the URL.
    #[must_use]
    pub fn query_param<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        let key = key.into();
        match value {
            Some(value) => {
                self.query.insert(key, value.to_string());
            }
            None => {
                self.query.remove(&key);
            }
        }
        self
    }

    /// Adds a header. Names are lower-cased; a later value replaces an earlier one.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_lowercase(), value.into());
        self
    }

    /// Adds every header in `headers`.
    #[must_use]
    pub fn headers<'h>(mut self, headers: impl IntoIterator<Item = (&'h String, &'h String)>) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.to_lowercase(), value.clone());
        }
        self
    }

    /// Sets a serialized JSON body and the matching content type.
    #[must_use]
    pub fn json_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingPathParameter`] if a placeholder in the
    ///   template is unbound or bound to an empty value
    /// - [`ValidationError::UnexpectedBody`] if a body was set on a GET or
    ///   DELETE request
    /// - [`ValidationError::InvalidHeader`] if a header name is not an HTTP
    ///   token or a value contains control characters
    pub fn build(self) -> Result<HttpRequest, ValidationError> {
        if self.body.is_some() && !self.method.allows_body() {
            return Err(ValidationError::UnexpectedBody {
                method: self.method.to_string(),
            });
        }

        let path = build_path(self.template, &self.path_params).map_err(|name| {
            ValidationError::MissingPathParameter {
                endpoint: self.operation,
                name,
            }
        })?;

        let mut url = format!("{}{path}", self.base_uri);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&encode_query(&self.query));
        }

        if let Some(name) = self.headers.iter().find_map(|(name, value)| {
            let valid = HeaderName::from_bytes(name.as_bytes()).is_ok()
                && HeaderValue::from_bytes(value.as_bytes()).is_ok();
            (!valid).then(|| name.clone())
        }) {
            return Err(ValidationError::InvalidHeader {
                endpoint: self.operation,
                name,
            });
        }

        let mut headers = self.headers;
        if self.body.is_some() {
            headers.insert("content-type".to_string(), JSON_CONTENT_TYPE.to_string());
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            path,
            query: self.query,
            headers,
            body: self.body,
        })
    }
}

/// Substitutes `{name}` placeholders in `template` with percent-encoded values.
///
/// Returns the name of the first placeholder that has no non-empty binding.
fn build_path(template: &str, params: &[(String, String)]) -> Result<String, String> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            // Unterminated brace, keep literally
            result.push_str(&rest[start..]);
            return Ok(result);
        };
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| name.to_string())?;
        result.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

fn encode_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
