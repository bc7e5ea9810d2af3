//! Square-Version and environment definitions.
//!
//! Square versions its API by release date: every request carries a
//! `Square-Version: YYYY-MM-DD` header selecting the schema revision.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A dated Square API schema revision.
///
/// # Example
///
/// ```rust
/// use square_api::SquareVersion;
///
/// let version: SquareVersion = "2024-01-18".parse().unwrap();
/// assert_eq!(version.to_string(), "2024-01-18");
/// assert_eq!(SquareVersion::default(), SquareVersion::latest());
/// assert!("2024-1-18".parse::<SquareVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareVersion(String);

impl SquareVersion {
    /// The schema revision this SDK's models were generated against.
    pub const LATEST: &'static str = "2024-01-18";

    /// Returns the schema revision this SDK's models were generated against.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    /// Creates a new validated version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSquareVersion`] if the value is not a
    /// `YYYY-MM-DD` date.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into().trim().to_string();
        if Self::is_valid_version_format(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidSquareVersion { version })
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
            && s.len() == 10
            && s.as_bytes()[4] == b'-'
            && s.as_bytes()[7] == b'-'
    }
}

impl Default for SquareVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl AsRef<str> for SquareVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SquareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SquareVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The Square environment requests are sent to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live merchant data.
    #[default]
    Production,
    /// The developer sandbox.
    Sandbox,
    /// A caller-supplied base URL (see [`SquareConfigBuilder::custom_url`](super::SquareConfigBuilder::custom_url)).
    Custom,
}

impl Environment {
    /// Base URI for production requests.
    pub const PRODUCTION_URL: &'static str = "https://connect.squareup.com";
    /// Base URI for sandbox requests.
    pub const SANDBOX_URL: &'static str = "https://connect.squareupsandbox.com";

    /// Returns the fixed base URI for this environment, or `None` for `Custom`.
    #[must_use]
    pub const fn base_url(&self) -> Option<&'static str> {
        match self {
            Self::Production => Some(Self::PRODUCTION_URL),
            Self::Sandbox => Some(Self::SANDBOX_URL),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
            Self::Custom => f.write_str("custom"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            "custom" => Ok(Self::Custom),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_version_parses_dates() {
        let version: SquareVersion = "2023-12-13".parse().unwrap();
        assert_eq!(version.as_ref(), "2023-12-13");
    }

    #[test]
    fn test_square_version_rejects_invalid() {
        assert!(SquareVersion::new("2023-12").is_err());
        assert!(SquareVersion::new("2023-13-01").is_err());
        assert!(SquareVersion::new("2023-02-30").is_err());
        assert!(SquareVersion::new("20231213").is_err());
        assert!(SquareVersion::new("latest").is_err());
    }

    #[test]
    fn test_square_version_ordering_follows_dates() {
        let older = SquareVersion::new("2023-06-08").unwrap();
        let newer = SquareVersion::new("2024-01-18").unwrap();
        assert!(older < newer);
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            Some("https://connect.squareup.com")
        );
        assert_eq!(
            Environment::Sandbox.base_url(),
            Some("https://connect.squareupsandbox.com")
        );
        assert_eq!(Environment::Custom.base_url(), None);
    }

    #[test]
    fn test_environment_round_trips_through_strings() {
        for env in [
            Environment::Production,
            Environment::Sandbox,
            Environment::Custom,
        ] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
        assert!("staging".parse::<Environment>().is_err());
    }
}
