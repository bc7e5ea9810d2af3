//! The Square API client.
//!
//! [`SquareClient`] ties a [`SquareConfig`] to a transport and the
//! authentication map, and hands out one API handle per resource group.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::apis::{
    ApiCall, ApplePayApi, CardsApi, CatalogApi, CustomersApi, DevicesApi, EmployeesApi, Endpoint,
    GiftCardActivitiesApi, InventoryApi, LoyaltyApi, OrdersApi, SubscriptionsApi,
};
use crate::auth::AuthManagers;
use crate::clients::{HttpCallback, HttpClient, ReqwestTransport, SquareError, Transport};
use crate::config::SquareConfig;
use crate::error::ConfigError;

/// Client for the Square API.
///
/// Cloning is cheap; clones share the transport, the authentication map and
/// the runtime used by blocking calls.
///
/// # Example
///
/// ```rust
/// use square_api::{AccessToken, Environment, SquareClient, SquareConfig};
///
/// let config = SquareConfig::builder()
///     .environment(Environment::Sandbox)
///     .access_token(AccessToken::new("EAAAE-sandbox-token").unwrap())
///     .build()
///     .unwrap();
/// let client = SquareClient::new(config).unwrap();
///
/// assert_eq!(client.config().base_uri(), "https://connect.squareupsandbox.com");
/// ```
#[derive(Clone)]
pub struct SquareClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: SquareConfig,
    http: HttpClient,
    runtime: OnceLock<Runtime>,
}

impl Drop for ClientInner {
    fn drop(&mut self) {
        // The last clone may be dropped inside an async context, where a
        // blocking shutdown would panic.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl fmt::Debug for SquareClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquareClient")
            .field("config", &self.inner.config)
            .field("http", &self.inner.http)
            .finish_non_exhaustive()
    }
}

// Verify SquareClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SquareClient>();
};

impl SquareClient {
    /// Creates a client with the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: SquareConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    /// Starts a builder for a client with a custom transport, authentication
    /// map or callback.
    #[must_use]
    pub fn builder(config: SquareConfig) -> SquareClientBuilder {
        SquareClientBuilder::new(config)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &SquareConfig {
        &self.inner.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.inner.http
    }

    /// Starts a call to an arbitrary endpoint.
    ///
    /// The resource handles such as [`orders`](Self::orders) cover the
    /// supported operations; this is the escape hatch for the rest.
    ///
    /// ```rust,ignore
    /// use square_api::apis::Endpoint;
    /// use square_api::clients::HttpMethod;
    ///
    /// const LIST_LOCATIONS: Endpoint = Endpoint::new("ListLocations", HttpMethod::Get, "/v2/locations");
    /// let locations = client.call::<serde_json::Value>(LIST_LOCATIONS).send().await?;
    /// ```
    pub fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiCall<'_, T> {
        ApiCall::new(self, endpoint)
    }

    /// Apple Pay domain registration.
    #[must_use]
    pub const fn apple_pay(&self) -> ApplePayApi<'_> {
        ApplePayApi::new(self)
    }

    /// Cards on file.
    #[must_use]
    pub const fn cards(&self) -> CardsApi<'_> {
        CardsApi::new(self)
    }

    /// Catalog listing.
    #[must_use]
    pub const fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi::new(self)
    }

    /// Customer search.
    #[must_use]
    pub const fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(self)
    }

    /// Device codes.
    #[must_use]
    pub const fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Employees. Deprecated by Square in favour of the Team API.
    #[must_use]
    pub const fn employees(&self) -> EmployeesApi<'_> {
        EmployeesApi::new(self)
    }

    /// Gift card activities.
    #[must_use]
    pub const fn gift_card_activities(&self) -> GiftCardActivitiesApi<'_> {
        GiftCardActivitiesApi::new(self)
    }

    /// Inventory adjustments.
    #[must_use]
    pub const fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(self)
    }

    /// Loyalty rewards.
    #[must_use]
    pub const fn loyalty(&self) -> LoyaltyApi<'_> {
        LoyaltyApi::new(self)
    }

    /// Orders.
    #[must_use]
    pub const fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Subscriptions.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi::new(self)
    }

    /// Returns the runtime that drives blocking calls, creating it on first use.
    pub(crate) fn blocking_runtime(&self) -> Result<&Runtime, SquareError> {
        if let Some(runtime) = self.inner.runtime.get() {
            return Ok(runtime);
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("square-api-blocking")
            .enable_all()
            .build()
            .map_err(|e| ConfigError::RuntimeInit {
                reason: e.to_string(),
            })?;

        tracing::debug!("Started runtime for blocking Square API calls");
        Ok(self.inner.runtime.get_or_init(|| runtime))
    }
}

/// Builder for [`SquareClient`].
///
/// ```rust
/// use square_api::auth::AuthManagers;
/// use square_api::{SquareClient, SquareConfig};
///
/// let config = SquareConfig::builder().build().unwrap();
/// let client = SquareClient::builder(config)
///     .auth_managers(AuthManagers::new())
///     .build()
///     .unwrap();
/// # let _ = client;
/// ```
#[derive(Debug)]
pub struct SquareClientBuilder {
    config: SquareConfig,
    transport: Option<Arc<dyn Transport>>,
    auth: Option<AuthManagers>,
    callback: Option<Arc<dyn HttpCallback>>,
}

impl SquareClientBuilder {
    fn new(config: SquareConfig) -> Self {
        Self {
            config,
            transport: None,
            auth: None,
            callback: None,
        }
    }

    /// Replaces the default reqwest transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the authentication map derived from the configuration.
    #[must_use]
    pub fn auth_managers(mut self, auth: AuthManagers) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Registers a callback invoked around every call.
    #[must_use]
    pub fn http_callback(mut self, callback: Arc<dyn HttpCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if no transport was supplied
    /// and the default one cannot be initialized.
    pub fn build(self) -> Result<SquareClient, ConfigError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.timeout())?),
        };
        let auth = self
            .auth
            .unwrap_or_else(|| AuthManagers::from_config(&self.config));
        let http = HttpClient::new(&self.config, transport, auth, self.callback);

        Ok(SquareClient {
            inner: Arc::new(ClientInner {
                config: self.config,
                http,
                runtime: OnceLock::new(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, Environment};

    #[test]
    fn test_new_uses_configured_environment() {
        let config = SquareConfig::builder()
            .environment(Environment::Sandbox)
            .build()
            .unwrap();
        let client = SquareClient::new(config).unwrap();

        assert_eq!(
            client.http_client().base_uri(),
            "https://connect.squareupsandbox.com"
        );
    }

    #[test]
    fn test_debug_masks_access_token() {
        let config = SquareConfig::builder()
            .access_token(AccessToken::new("secret-token").unwrap())
            .build()
            .unwrap();
        let client = SquareClient::new(config).unwrap();

        assert!(!format!("{client:?}").contains("secret-token"));
    }

    #[test]
    fn test_blocking_runtime_is_created_once() {
        let client = SquareClient::new(SquareConfig::builder().build().unwrap()).unwrap();
        let clone = client.clone();
        let first: *const Runtime = client.blocking_runtime().unwrap();
        let second: *const Runtime = clone.blocking_runtime().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_dropping_client_with_runtime_inside_async_context() {
        let client = std::thread::spawn(|| {
            let client = SquareClient::new(SquareConfig::builder().build().unwrap()).unwrap();
            client.blocking_runtime().unwrap();
            client
        })
        .join()
        .unwrap();

        drop(client);
    }
}
