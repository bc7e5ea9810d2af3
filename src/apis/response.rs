//! Response wrapper for API calls.
//!
//! This module provides [`ApiResponse<T>`], a wrapper that pairs a decoded
//! response model with the [`HttpContext`] of the call that produced it.
//!
//! # Deref Pattern
//!
//! `ApiResponse<T>` implements `Deref<Target = T>`, so fields of the model
//! can be read directly:
//!
//! ```rust,ignore
//! let response = client.orders().retrieve_order("CAISENgvlJ6jLWAzERDzjyHVybY").send().await?;
//!
//! // Model fields via Deref
//! if let Some(order) = response.order.as_option() {
//!     println!("Order state: {:?}", order.state);
//! }
//!
//! // Call context
//! println!("Status: {}", response.context().response().code);
//!
//! // Take ownership of the model
//! let model = response.into_inner();
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::clients::HttpContext;

/// A decoded response model plus the request/response it came from.
///
/// Equality and hashing consider only the model; the context is kept for
/// introspection.
///
/// # Example
///
/// ```rust
/// use square_api::apis::ApiResponse;
/// use square_api::clients::{HttpContext, HttpMethod, HttpRequest, HttpResponse};
/// use std::collections::HashMap;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://connect.squareup.com", "/v2/x")
///     .build()
///     .unwrap();
/// let first = ApiResponse::new(
///     42,
///     HttpContext::new(request.clone(), HttpResponse::new(200, HashMap::new(), "42")),
/// );
/// let second = ApiResponse::new(
///     42,
///     HttpContext::new(request, HttpResponse::new(201, HashMap::new(), " 42 ")),
/// );
///
/// assert_eq!(*first, 42);
/// assert_eq!(first, second);
/// assert_eq!(first.status_code(), 200);
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    data: T,
    context: HttpContext,
}

impl<T> ApiResponse<T> {
    /// Creates a new response wrapper.
    #[must_use]
    pub const fn new(data: T, context: HttpContext) -> Self {
        Self { data, context }
    }

    /// Returns the request and raw response of the call.
    #[must_use]
    pub const fn context(&self) -> &HttpContext {
        &self.context
    }

    /// Returns the HTTP status of the response.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.context.response().code
    }

    /// Consumes the wrapper and returns the model.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Consumes the wrapper and returns the model and the context.
    #[must_use]
    pub fn into_parts(self) -> (T, HttpContext) {
        (self.data, self.context)
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> AsRef<T> for ApiResponse<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T: PartialEq> PartialEq for ApiResponse<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for ApiResponse<T> {}

impl<T: Hash> Hash for ApiResponse<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}
