//! The generic call engine shared by every API operation.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::apis::{ApiResponse, Endpoint};
use crate::client::SquareClient;
use crate::clients::{DecodeError, HttpContext, HttpRequest, SquareError};
use crate::error::ValidationError;

/// A pending API call.
///
/// An `ApiCall` binds an [`Endpoint`] to path parameters, query parameters,
/// extra headers and an optional body. Nothing is sent until one of the `send` methods is
/// called, and all three calling conventions run the same pipeline:
///
/// - [`send`](Self::send): async
/// - [`send_with_cancel`](Self::send_with_cancel): async, abandoned when the
///   token is cancelled before the response has been read
/// - [`send_blocking`](Self::send_blocking): blocks the current thread
///
/// # Example
///
/// ```rust,ignore
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let order = client
///     .orders()
///     .retrieve_order("CAISENgvlJ6jLWAzERDzjyHVybY")
///     .send_with_cancel(&token)
///     .await?;
/// ```
#[must_use = "an ApiCall does nothing until it is sent"]
pub struct ApiCall<'a, T> {
    client: &'a SquareClient,
    endpoint: Endpoint,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, Option<String>)>,
    headers: Vec<(&'static str, String)>,
    body: Option<Result<String, ValidationError>>,
    response: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ApiCall<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCall")
            .field("endpoint", &self.endpoint)
            .field("path_params", &self.path_params)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl<'a, T: DeserializeOwned> ApiCall<'a, T> {
    pub(crate) const fn new(client: &'a SquareClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            response: PhantomData,
        }
    }

    /// Returns the endpoint being called.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Binds a path template placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter. `None` values are omitted.
    pub fn query_param<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.query.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Adds a header for this call only, replacing any default with the same name.
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// A serialization failure is reported when the call is sent.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_string(body).map_err(ValidationError::from));
        self
    }

    /// Builds the request without credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Validation`] if a path parameter is missing, the
    /// body could not be serialized, or a body was set on a GET or DELETE
    /// endpoint.
    pub fn build_request(&self) -> Result<HttpRequest, SquareError> {
        let mut builder = self
            .client
            .http_client()
            .request_builder(self.endpoint.method, self.endpoint.path)
            .operation(self.endpoint.name);

        for (name, value) in &self.path_params {
            builder = builder.path_param(*name, value.as_str());
        }
        for (name, value) in &self.query {
            builder = builder.query_param(*name, value.as_ref());
        }
        for (name, value) in &self.headers {
            builder = builder.header(name, value.clone());
        }
        if let Some(body) = &self.body {
            builder = builder.json_body(body.clone()?);
        }

        Ok(builder.build()?)
    }

    /// Sends the call.
    ///
    /// # Errors
    ///
    /// Returns the [`SquareError`] of the first pipeline stage that fails.
    pub async fn send(self) -> Result<ApiResponse<T>, SquareError> {
        self.execute(None).await
    }

    /// Sends the call, abandoning it if `token` is cancelled before the
    /// response has been read.
    ///
    /// Cancellation is best-effort: the request may already have reached
    /// Square. Pass an idempotency key on the request model when the
    /// operation must not be applied twice.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::Cancelled`] on cancellation, otherwise the same
    /// errors as [`send`](Self::send).
    pub async fn send_with_cancel(self, token: &CancellationToken) -> Result<ApiResponse<T>, SquareError> {
        self.execute(Some(token)).await
    }

    /// Sends the call, blocking the current thread until it completes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlockingInAsyncContext`] when called from
    /// inside a tokio runtime, otherwise the same errors as [`send`](Self::send).
    pub fn send_blocking(self) -> Result<ApiResponse<T>, SquareError> {
        self.block_on(None)
    }

    /// Blocking variant of [`send_with_cancel`](Self::send_with_cancel).
    ///
    /// # Errors
    ///
    /// Same as [`send_blocking`](Self::send_blocking), plus
    /// [`SquareError::Cancelled`] on cancellation.
    pub fn send_blocking_with_cancel(self, token: &CancellationToken) -> Result<ApiResponse<T>, SquareError> {
        self.block_on(Some(token))
    }

    fn block_on(self, cancel: Option<&CancellationToken>) -> Result<ApiResponse<T>, SquareError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ValidationError::BlockingInAsyncContext.into());
        }
        let runtime = self.client.blocking_runtime()?;
        runtime.block_on(self.execute(cancel))
    }

    async fn execute(&self, cancel: Option<&CancellationToken>) -> Result<ApiResponse<T>, SquareError> {
        let request = self.build_request()?;

        if self.endpoint.deprecated {
            tracing::warn!(
                endpoint = self.endpoint.name,
                path = self.endpoint.path,
                "Calling deprecated Square API endpoint"
            );
        }

        let context = self
            .client
            .http_client()
            .execute(request, self.endpoint.auth, cancel)
            .await?;

        decode(context)
    }
}

fn decode<T: DeserializeOwned>(context: HttpContext) -> Result<ApiResponse<T>, SquareError> {
    let decoded = serde_json::from_str::<T>(context.response().json_body());
    match decoded {
        Ok(data) => Ok(ApiResponse::new(data, context)),
        Err(error) => Err(DecodeError::new(std::any::type_name::<T>(), &error, context).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, HttpResponse};
    use crate::config::SquareConfig;
    use std::collections::HashMap;

    fn client() -> SquareClient {
        SquareClient::new(SquareConfig::builder().build().unwrap()).unwrap()
    }

    const WIDGET: Endpoint = Endpoint::new("RetrieveWidget", HttpMethod::Get, "/v2/widgets/{id}");

    #[test]
    fn test_build_request_substitutes_path_and_sorts_query() {
        let client = client();
        let request = client
            .call::<serde_json::Value>(WIDGET)
            .path_param("id", "abc")
            .query_param("z", Some("last"))
            .query_param("a", Some(1))
            .query_param("m", None::<String>)
            .build_request()
            .unwrap();

        assert_eq!(request.path(), "/v2/widgets/abc");
        assert_eq!(
            request.url(),
            "https://connect.squareup.com/v2/widgets/abc?a=1&z=last"
        );
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.header("authorization").is_none());
    }

    #[test]
    fn test_call_header_overrides_default() {
        let client = client();
        let request = client
            .call::<serde_json::Value>(WIDGET)
            .path_param("id", "abc")
            .header("Square-Version", "2023-12-13")
            .build_request()
            .unwrap();

        assert_eq!(request.header("square-version"), Some("2023-12-13"));
    }

    #[test]
    fn test_build_request_reports_missing_path_param() {
        let client = client();
        let error = client
            .call::<serde_json::Value>(WIDGET)
            .build_request()
            .unwrap_err();

        assert!(matches!(
            error,
            SquareError::Validation(ValidationError::MissingPathParameter {
                endpoint: "RetrieveWidget",
                ..
            })
        ));
    }

    #[test]
    fn test_build_request_rejects_body_on_get() {
        let client = client();
        let error = client
            .call::<serde_json::Value>(WIDGET)
            .path_param("id", "abc")
            .body(&serde_json::json!({"x": 1}))
            .build_request()
            .unwrap_err();

        assert!(matches!(
            error,
            SquareError::Validation(ValidationError::UnexpectedBody { .. })
        ));
    }

    #[test]
    fn test_decode_treats_empty_body_as_empty_object() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://x.test", "/v2/x")
            .build()
            .unwrap();
        let context = HttpContext::new(request, HttpResponse::new(200, HashMap::new(), ""));

        let response: ApiResponse<serde_json::Value> = decode(context).unwrap();
        assert_eq!(*response, serde_json::json!({}));
    }

    #[test]
    fn test_decode_error_names_target_type() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://x.test", "/v2/x")
            .build()
            .unwrap();
        let context = HttpContext::new(request, HttpResponse::new(200, HashMap::new(), "not json"));

        let error = decode::<crate::models::RetrieveOrderResponse>(context).unwrap_err();
        match error {
            SquareError::Decode(e) => {
                assert!(e.type_name().ends_with("RetrieveOrderResponse"));
                assert_eq!(e.context().response().body, "not json");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_blocking_inside_runtime_is_rejected() {
        let client = client();
        let error = client
            .call::<serde_json::Value>(WIDGET)
            .path_param("id", "abc")
            .send_blocking()
            .unwrap_err();

        assert!(matches!(
            error,
            SquareError::Validation(ValidationError::BlockingInAsyncContext)
        ));
    }
}
