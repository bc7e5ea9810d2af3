//! Error types for configuration and caller-input validation.
//!
//! This module contains the errors raised before any network activity takes
//! place:
//!
//! - [`ConfigError`]: invalid SDK configuration values
//! - [`ValidationError`]: malformed caller input (missing required model
//!   fields, unbound path parameters, unsendable headers, invalid request
//!   shapes)
//!
//! # Example
//!
//! ```rust
//! use square_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Square access token.")]
    EmptyAccessToken,

    /// Square-Version is invalid.
    #[error("Invalid Square version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2024-01-18').")]
    InvalidSquareVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Custom base URL is invalid.
    #[error("Invalid custom URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://connect.example.com').")]
    InvalidCustomUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'production', 'sandbox' or 'custom'.")]
    InvalidEnvironment {
        /// The value that was provided.
        value: String,
    },

    /// User agent detail exceeds the allowed length.
    #[error("User agent detail is {length} characters long; at most {max} are allowed.")]
    UserAgentDetailTooLong {
        /// The length of the provided detail.
        length: usize,
        /// The maximum allowed length.
        max: usize,
    },

    /// An additional header name is not a valid HTTP token.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The invalid header name.
        name: String,
    },

    /// A header value contains characters that cannot be sent, such as CR or LF.
    #[error("Invalid value for header '{name}'. Header values cannot contain control characters.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The default HTTP transport could not be created.
    #[error("Failed to initialize the HTTP transport: {reason}")]
    TransportInit {
        /// The underlying failure.
        reason: String,
    },

    /// The runtime that drives blocking calls could not be started.
    #[error("Failed to start the runtime for blocking calls: {reason}")]
    RuntimeInit {
        /// The underlying failure.
        reason: String,
    },
}

/// Errors raised when caller input is malformed.
///
/// A `ValidationError` is always raised before the transport is invoked, so
/// no request has reached Square when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required model fields were not provided to a builder.
    #[error("Missing required field(s) for {model}: {}", .fields.join(", "))]
    MissingRequiredFields {
        /// The model type being built.
        model: &'static str,
        /// The names of the missing fields, in declaration order.
        fields: Vec<&'static str>,
    },

    /// A path template placeholder was not bound, or was bound to an empty value.
    #[error("Missing path parameter '{name}' for {endpoint}")]
    MissingPathParameter {
        /// The endpoint being called.
        endpoint: &'static str,
        /// The placeholder name.
        name: String,
    },

    /// A request body was supplied for a method that cannot carry one.
    #[error("Cannot send a body with {method} requests.")]
    UnexpectedBody {
        /// The HTTP method of the request.
        method: String,
    },

    /// A request header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}' for {endpoint}: names must be HTTP tokens and values cannot contain control characters.")]
    InvalidHeader {
        /// The endpoint being called.
        endpoint: &'static str,
        /// The offending header name.
        name: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {message}")]
    Serialization {
        /// The serializer's message.
        message: String,
    },

    /// A blocking call was made from inside an async runtime.
    #[error("Blocking calls cannot be made from within an async runtime; use `send().await` instead.")]
    BlockingInAsyncContext,
}

impl From<serde_json::Error> for ValidationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigError>();
    assert_send_sync::<ValidationError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_square_version_error_message() {
        let error = ConfigError::InvalidSquareVersion {
            version: "2024-13".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("2024-13"));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "custom_url",
        };
        let message = error.to_string();
        assert!(message.contains("custom_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_required_fields_lists_every_field() {
        let error = ValidationError::MissingRequiredFields {
            model: "CreateCardRequest",
            fields: vec!["idempotency_key", "source_id"],
        };
        assert_eq!(
            error.to_string(),
            "Missing required field(s) for CreateCardRequest: idempotency_key, source_id"
        );
    }

    #[test]
    fn test_missing_path_parameter_message() {
        let error = ValidationError::MissingPathParameter {
            endpoint: "RetrieveOrder",
            name: "order_id".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("order_id"));
        assert!(message.contains("RetrieveOrder"));
    }

    #[test]
    fn test_invalid_header_messages_omit_the_value() {
        let config = ConfigError::InvalidHeaderValue {
            name: "x-trace".to_string(),
        };
        let validation = ValidationError::InvalidHeader {
            endpoint: "RetrieveOrder",
            name: "x-trace".to_string(),
        };

        assert!(config.to_string().contains("x-trace"));
        assert!(validation.to_string().contains("RetrieveOrder"));
    }

    #[test]
    fn test_serde_error_converts_to_serialization_error() {
        let serde_error = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: ValidationError = serde_error.into();
        assert!(matches!(error, ValidationError::Serialization { .. }));
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &ValidationError::BlockingInAsyncContext;
    }
}
