//! Configuration types for the Square API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Square.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SquareConfig`]: The main configuration struct holding all SDK settings
//! - [`SquareConfigBuilder`]: A builder for constructing [`SquareConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`CustomUrl`]: A validated base URL for the `Custom` environment
//! - [`SquareVersion`]: The dated schema revision sent in `Square-Version`
//! - [`Environment`]: Production, sandbox, or a custom base URL
//!
//! # Example
//!
//! ```rust
//! use square_api::{SquareConfig, AccessToken, Environment, SquareVersion};
//!
//! let config = SquareConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .access_token(AccessToken::new("EAAA-sandbox-token").unwrap())
//!     .square_version(SquareVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri(), "https://connect.squareupsandbox.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, CustomUrl};
pub use version::{Environment, SquareVersion};

use crate::error::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;

/// SDK version sent in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum supported Rust version, reported in the `User-Agent` header.
const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Maximum number of characters accepted for the user agent detail.
pub const MAX_USER_AGENT_DETAIL_LENGTH: usize = 128;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Square API SDK.
///
/// # Thread Safety
///
/// `SquareConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. It is never mutated once built; use
/// [`SquareConfig::to_builder`] to derive a modified copy.
///
/// # Example
///
/// ```rust
/// use square_api::{SquareConfig, AccessToken};
///
/// let config = SquareConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .user_agent_detail("my-app/2.1")
///     .build()
///     .unwrap();
///
/// assert!(config.user_agent().ends_with(" my-app/2.1"));
/// ```
#[derive(Clone, Debug)]
pub struct SquareConfig {
    environment: Environment,
    custom_url: Option<CustomUrl>,
    square_version: SquareVersion,
    access_token: Option<AccessToken>,
    timeout: Duration,
    user_agent_detail: Option<String>,
    additional_headers: Vec<(String, String)>,
}

impl SquareConfig {
    /// Creates a new builder for constructing a `SquareConfig`.
    #[must_use]
    pub fn builder() -> SquareConfigBuilder {
        SquareConfigBuilder::new()
    }

    /// Returns a builder seeded with this configuration's values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use square_api::{SquareConfig, Environment};
    ///
    /// let production = SquareConfig::builder().build().unwrap();
    /// let sandbox = production
    ///     .to_builder()
    ///     .environment(Environment::Sandbox)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(production.environment(), Environment::Production);
    /// assert_eq!(sandbox.environment(), Environment::Sandbox);
    /// ```
    #[must_use]
    pub fn to_builder(&self) -> SquareConfigBuilder {
        SquareConfigBuilder {
            environment: Some(self.environment),
            custom_url: self.custom_url.clone(),
            square_version: Some(self.square_version.clone()),
            access_token: self.access_token.clone(),
            timeout: Some(self.timeout),
            user_agent_detail: self.user_agent_detail.clone(),
            additional_headers: self.additional_headers.clone(),
        }
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the custom URL, if configured.
    #[must_use]
    pub const fn custom_url(&self) -> Option<&CustomUrl> {
        self.custom_url.as_ref()
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        match (self.environment.base_url(), &self.custom_url) {
            (Some(url), _) => url,
            (None, Some(custom)) => custom.as_ref(),
            // build() rejects Custom without a URL
            (None, None) => Environment::PRODUCTION_URL,
        }
    }

    /// Returns the Square-Version.
    #[must_use]
    pub const fn square_version(&self) -> &SquareVersion {
        &self.square_version
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent detail, if configured.
    #[must_use]
    pub fn user_agent_detail(&self) -> Option<&str> {
        self.user_agent_detail.as_deref()
    }

    /// Returns the extra headers sent with every request.
    ///
    /// Header names are lower-case.
    #[must_use]
    pub fn additional_headers(&self) -> &[(String, String)] {
        &self.additional_headers
    }

    /// Returns the `User-Agent` header value.
    ///
    /// Format: `Square-Rust-SDK/{sdk} ({square_version}) Rust/{rust}` followed
    /// by the user agent detail when one is configured.
    #[must_use]
    pub fn user_agent(&self) -> String {
        let base = format!(
            "Square-Rust-SDK/{SDK_VERSION} ({}) Rust/{RUST_VERSION}",
            self.square_version
        );
        match &self.user_agent_detail {
            Some(detail) => format!("{base} {detail}"),
            None => base,
        }
    }
}

// Verify SquareConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SquareConfig>();
};

/// Builder for constructing [`SquareConfig`] instances.
///
/// No field is strictly required. An access token can be omitted for
/// clients that only call unauthenticated endpoints, in which case
/// authenticated calls fail with an authentication error before any request
/// is sent.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `square_version`: [`SquareVersion::latest`]
/// - `timeout`: 60 seconds
/// - `custom_url`, `access_token`, `user_agent_detail`: `None`
/// - `additional_headers`: empty
///
/// # Example
///
/// ```rust
/// use square_api::{SquareConfig, AccessToken, CustomUrl, Environment};
/// use std::time::Duration;
///
/// let config = SquareConfig::builder()
///     .environment(Environment::Custom)
///     .custom_url(CustomUrl::new("http://localhost:4010").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .timeout(Duration::from_secs(5))
///     .additional_header("X-Trace-Id", "abc123")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_uri(), "http://localhost:4010");
/// assert_eq!(config.additional_headers()[0].0, "x-trace-id");
/// ```
#[derive(Debug, Default)]
pub struct SquareConfigBuilder {
    environment: Option<Environment>,
    custom_url: Option<CustomUrl>,
    square_version: Option<SquareVersion>,
    access_token: Option<AccessToken>,
    timeout: Option<Duration>,
    user_agent_detail: Option<String>,
    additional_headers: Vec<(String, String)>,
}

impl SquareConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the base URL used when the environment is [`Environment::Custom`].
    #[must_use]
    pub fn custom_url(mut self, url: CustomUrl) -> Self {
        self.custom_url = Some(url);
        self
    }

    /// Sets the Square-Version.
    #[must_use]
    pub fn square_version(mut self, version: SquareVersion) -> Self {
        self.square_version = Some(version);
        self
    }

    /// Sets the access token used by the bearer authentication scheme.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a detail string appended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_detail(mut self, detail: impl Into<String>) -> Self {
        self.user_agent_detail = Some(detail.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Adding the same name twice replaces the earlier value.
    #[must_use]
    pub fn additional_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_lowercase();
        self.additional_headers.retain(|(existing, _)| existing != &name);
        self.additional_headers.push((name, value.into()));
        self
    }

    /// Builds the [`SquareConfig`], validating the collected values.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if the environment is
    ///   `Custom` and no custom URL was set
    /// - [`ConfigError::UserAgentDetailTooLong`] if the detail exceeds 128
    ///   characters
    /// - [`ConfigError::InvalidHeaderName`] if an additional header name is
    ///   not a valid HTTP token
    /// - [`ConfigError::InvalidHeaderValue`] if an additional header value or
    ///   the user agent detail contains control characters
    pub fn build(self) -> Result<SquareConfig, ConfigError> {
        let environment = self.environment.unwrap_or_default();
        if environment == Environment::Custom && self.custom_url.is_none() {
            return Err(ConfigError::MissingRequiredField {
                field: "custom_url",
            });
        }

        if let Some(detail) = &self.user_agent_detail {
            let length = detail.chars().count();
            if length > MAX_USER_AGENT_DETAIL_LENGTH {
                return Err(ConfigError::UserAgentDetailTooLong {
                    length,
                    max: MAX_USER_AGENT_DETAIL_LENGTH,
                });
            }
        }

        if let Some((name, _)) = self
            .additional_headers
            .iter()
            .find(|(name, _)| HeaderName::from_bytes(name.as_bytes()).is_err())
        {
            return Err(ConfigError::InvalidHeaderName { name: name.clone() });
        }

        if let Some((name, _)) = self
            .additional_headers
            .iter()
            .find(|(_, value)| HeaderValue::from_bytes(value.as_bytes()).is_err())
        {
            return Err(ConfigError::InvalidHeaderValue { name: name.clone() });
        }

        let config = SquareConfig {
            environment,
            custom_url: self.custom_url,
            square_version: self.square_version.unwrap_or_default(),
            access_token: self.access_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_detail: self.user_agent_detail,
            additional_headers: self.additional_headers,
        };

        if HeaderValue::from_bytes(config.user_agent().as_bytes()).is_err() {
            return Err(ConfigError::InvalidHeaderValue {
                name: "user-agent".to_string(),
            });
        }

        Ok(config)
    }
}
