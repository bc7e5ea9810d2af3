//! Hooks for observing requests and responses.

use crate::clients::{HttpContext, HttpRequest};

/// Observer invoked around every call.
///
/// Both methods default to doing nothing. Callbacks only observe; they
/// cannot alter the request or the response.
///
/// # Example
///
/// ```rust
/// use square_api::clients::{HttpCallback, HttpContext};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Debug, Default)]
/// struct StatusCounter {
///     failures: AtomicUsize,
/// }
///
/// impl HttpCallback for StatusCounter {
///     fn on_after_response(&self, context: &HttpContext) {
///         if !context.response().is_ok() {
///             self.failures.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
/// ```
pub trait HttpCallback: Send + Sync + std::fmt::Debug {
    /// Called with the request before credentials are attached.
    fn on_before_request(&self, _request: &HttpRequest) {}

    /// Called once the response body has been read, before status validation.
    fn on_after_response(&self, _context: &HttpContext) {}
}
