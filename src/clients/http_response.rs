//! HTTP response types for the Square API SDK.

use std::collections::HashMap;

/// A raw HTTP response received from the transport.
///
/// The body is kept as received; decoding into a typed model happens later
/// in the pipeline.
///
/// # Example
///
/// ```rust
/// use square_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("square-version".to_string(), vec!["2024-01-18".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"order":{}}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.header("Square-Version"), Some("2024-01-18"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`. Header names are lower-cased.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }
        Self {
            code,
            headers: normalized,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body to decode, treating an empty body as `{}`.
    #[must_use]
    pub fn json_body(&self) -> &str {
        if self.body.trim().is_empty() {
            "{}"
        } else {
            &self.body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_other_codes() {
        for code in [100, 301, 400, 404, 429, 500, 503] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_empty_body_decodes_as_empty_object() {
        let response = HttpResponse::new(200, HashMap::new(), "  ");
        assert_eq!(response.json_body(), "{}");

        let response = HttpResponse::new(200, HashMap::new(), r#"{"a":1}"#);
        assert_eq!(response.json_body(), r#"{"a":1}"#);
    }

    #[test]
    fn test_header_names_are_normalized() {
        let mut headers = HashMap::new();
        headers.insert("X-Request-Id".to_string(), vec!["r1".to_string()]);
        headers.insert(
            "Set-Cookie".to_string(),
            vec!["a=1".to_string(), "b=2".to_string()],
        );

        let response = HttpResponse::new(200, headers, "");
        assert_eq!(response.header("x-request-id"), Some("r1"));
        assert_eq!(response.headers.get("set-cookie").map(Vec::len), Some(2));
    }
}
