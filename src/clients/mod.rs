//! HTTP client types for Square API communication.
//!
//! This module provides the foundational HTTP layer shared by every API:
//! request construction, the pluggable transport, status validation and the
//! error taxonomy.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Sends authenticated requests and validates the status
//! - [`HttpRequest`]: An immutable, fully-built request
//! - [`HttpResponse`]: A raw response from the transport
//! - [`HttpContext`]: A request paired with its response
//! - [`Transport`]: The pluggable executor, with [`ReqwestTransport`] as default
//! - [`HttpCallback`]: Optional observer invoked around each call
//! - [`SquareError`]: Unified error type returned by every call
//!
//! # Pipeline
//!
//! Each call runs the same steps in order: build the request, attach
//! credentials, execute it on the transport, validate the status and decode
//! the body. Only the transport step suspends. Nothing is retried.

mod callback;
mod errors;
mod http_client;
mod http_context;
mod http_request;
mod http_response;
mod transport;

pub use callback::HttpCallback;
pub use errors::{
    ApiError, ApiErrorKind, DecodeError, ErrorEntry, NetworkError, NetworkErrorKind, SquareError,
};
pub use http_client::HttpClient;
pub use http_context::HttpContext;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
