//! Three-state optional field values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional model field that distinguishes "not provided" from "null".
///
/// | Variant  | Serialized as        |
/// |----------|----------------------|
/// | `Absent` | field omitted        |
/// | `Null`   | `"field": null`      |
/// | `Value`  | `"field": <value>`   |
///
/// Sending `Null` on an update request clears the field on the server, while
/// leaving it `Absent` keeps the stored value.
///
/// # Example
///
/// ```rust
/// use square_api::models::Nullable;
///
/// let absent: Nullable<String> = Nullable::Absent;
/// let null: Nullable<String> = Nullable::Null;
/// let value: Nullable<String> = "hello".into();
///
/// assert!(absent.is_absent());
/// assert!(null.is_null());
/// assert_eq!(value.as_option().map(String::as_str), Some("hello"));
/// assert_ne!(absent, null);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nullable<T> {
    /// The field was not provided.
    #[default]
    Absent,
    /// The field was explicitly set to null.
    Null,
    /// The field has a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the field was not provided.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field was explicitly null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the field has a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns a reference to the value, collapsing `Absent` and `Null` to `None`.
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts into an `Option`, collapsing `Absent` and `Null` to `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Creates `Value` from `Some` and `Absent` from `None`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }

    /// Maps the contained value.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(f(value)),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Nullable<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            // Absent fields are skipped by the containing model
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        note: Nullable<String>,
    }

    #[test]
    fn test_absent_field_is_omitted() {
        let holder = Holder {
            note: Nullable::Absent,
        };
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({}));
    }

    #[test]
    fn test_null_field_serializes_as_null() {
        let holder = Holder {
            note: Nullable::Null,
        };
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({"note": null}));
    }

    #[test]
    fn test_value_field_serializes_normally() {
        let holder = Holder {
            note: "hi".into(),
        };
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({"note": "hi"}));
    }

    #[test]
    fn test_deserialize_distinguishes_all_three_states() {
        let absent: Holder = serde_json::from_value(json!({})).unwrap();
        let null: Holder = serde_json::from_value(json!({"note": null})).unwrap();
        let value: Holder = serde_json::from_value(json!({"note": "x"})).unwrap();

        assert_eq!(absent.note, Nullable::Absent);
        assert_eq!(null.note, Nullable::Null);
        assert_eq!(value.note, Nullable::Value("x".to_string()));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Nullable::from_option(Some(3_i64)), Nullable::Value(3));
        assert_eq!(Nullable::<i64>::from_option(None), Nullable::Absent);
        assert_eq!(Nullable::Value(3_i64).into_option(), Some(3));
        assert_eq!(Nullable::<i64>::Null.into_option(), None);
        assert_eq!(Nullable::Value(2_i64).map(|v| v * 2), Nullable::Value(4));
    }
}
