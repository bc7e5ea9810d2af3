//! Request/response pairing kept for introspection.

use crate::clients::{HttpRequest, HttpResponse};

/// The outgoing request (after authentication) and the raw response it received.
///
/// Attached to every [`ApiResponse`](crate::apis::ApiResponse) and to every
/// [`ApiError`](crate::clients::ApiError).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpContext {
    request: HttpRequest,
    response: HttpResponse,
}

impl HttpContext {
    /// Pairs a request with its response.
    #[must_use]
    pub const fn new(request: HttpRequest, response: HttpResponse) -> Self {
        Self { request, response }
    }

    /// Returns the request as sent.
    #[must_use]
    pub const fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Returns the raw response.
    #[must_use]
    pub const fn response(&self) -> &HttpResponse {
        &self.response
    }
}
