//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Square access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use square_api::AccessToken;
///
/// let token = AccessToken::new("EAAA-my-token").unwrap();
/// assert_eq!(token.as_ref(), "EAAA-my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated base URL for the `Custom` environment.
///
/// The URL must be absolute with an `http` or `https` scheme and a non-empty
/// host. Trailing slashes are trimmed so paths like `/v2/orders` can be
/// appended directly.
///
/// # Example
///
/// ```rust
/// use square_api::CustomUrl;
///
/// let url = CustomUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl CustomUrl {
    /// Creates a new validated custom URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCustomUrl`] if the URL is not an absolute
    /// http(s) URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidCustomUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidCustomUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidCustomUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidCustomUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for CustomUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_custom_url_trims_trailing_slash() {
        let url = CustomUrl::new("https://connect.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://connect.example.com");
        assert_eq!(url.host_name(), "connect.example.com");
    }

    #[test]
    fn test_custom_url_keeps_port_and_path_prefix() {
        let url = CustomUrl::new("http://127.0.0.1:4010/proxy").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:4010/proxy");
    }

    #[test]
    fn test_custom_url_rejects_invalid() {
        // No scheme
        assert!(CustomUrl::new("connect.example.com").is_err());

        // Empty host
        assert!(CustomUrl::new("https://").is_err());

        // Unsupported scheme
        assert!(CustomUrl::new("ftp://example.com").is_err());

        // Query strings cannot be part of a base URL
        assert!(CustomUrl::new("https://example.com?x=1").is_err());
    }
}
