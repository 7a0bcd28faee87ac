//! HTTP response types for the PinMeTo API client.
//!
//! [`HttpResponse`] keeps the raw body text. Decoding is left to the caller,
//! either as a generic [`serde_json::Value`] or into a caller-defined type.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the PinMeTo API.
///
/// Every response is returned as-is, including non-2xx responses, whose
/// error body is available in [`body`](Self::body).
///
/// # Example
///
/// ```rust
/// use pinmeto_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"data":[]}"#.to_string());
/// assert!(response.is_ok());
///
/// let json = response.json().unwrap();
/// assert!(json["data"].as_array().unwrap().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as generic JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Decodes the body into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body does not match `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        HttpResponse::new(code, headers, body.to_string())
    }

    #[test]
    fn test_is_ok_for_2xx_range() {
        assert!(response(200, "").is_ok());
        assert!(response(204, "").is_ok());
        assert!(!response(401, "").is_ok());
        assert!(!response(500, "").is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let res = response(200, "{}");
        assert_eq!(res.header("Content-Type"), Some("application/json"));
        assert_eq!(res.header("x-missing"), None);
    }

    #[test]
    fn test_error_body_is_kept_raw() {
        let res = response(404, r#"{"error":"Location not found"}"#);
        assert_eq!(res.body, r#"{"error":"Location not found"}"#);
        assert_eq!(res.json().unwrap()["error"], "Location not found");
    }

    #[test]
    fn test_json_as_decodes_into_caller_type() {
        #[derive(Deserialize)]
        struct Location {
            #[serde(rename = "storeId")]
            store_id: String,
        }

        let res = response(200, r#"{"storeId":"store42","name":"Main"}"#);
        let location: Location = res.json_as().unwrap();
        assert_eq!(location.store_id, "store42");
    }

    #[test]
    fn test_json_fails_on_non_json_body() {
        assert!(response(502, "Bad Gateway").json().is_err());
    }
}
