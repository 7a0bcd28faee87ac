//! HTTP request types for the PinMeTo API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the PinMeTo API, plus the [`Parameters`] map used
//! by the generic request call.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Ordered request parameters.
///
/// Sent as the query string for GET requests and as the body otherwise.
/// Insertion order is kept, so query strings are emitted in the order the
/// parameters were added.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// HTTP methods supported by the PinMeTo API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Form content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }

    /// Encodes a body for this content type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidFormBody`] if a form body is
    /// not a JSON object.
    pub fn encode_body(&self, body: &serde_json::Value) -> Result<String, InvalidHttpRequestError> {
        match self {
            Self::Json => Ok(body.to_string()),
            Self::FormUrlEncoded => body
                .as_object()
                .map(encode_pairs)
                .ok_or(InvalidHttpRequestError::InvalidFormBody),
        }
    }
}

/// URL-encodes parameters as `key=value` pairs joined by `&`.
///
/// Strings are emitted as-is, other scalars through their JSON text and
/// nested values as compact JSON. `null` values are skipped.
#[must_use]
pub fn encode_pairs(parameters: &Parameters) -> String {
    parameters
        .iter()
        .filter_map(|(key, value)| {
            parameter_text(value).map(|value| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(&value))
            })
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn parameter_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// An HTTP request to be sent to the PinMeTo API.
///
/// The `path` is the resource call, e.g. `locations/store42` or
/// `insights/google/`. The API prefix and host are resolved by
/// [`HttpClient`](crate::clients::HttpClient).
///
/// # Example
///
/// ```rust
/// use pinmeto_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "locations")
///     .query_param("pagesize", "50")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "locations")
///     .query_param("upsert", "true")
///     .body(json!({"storeId": "store42", "name": "Main Street"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource call for this request.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL, in order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` is empty
    /// - `http_method` is `Get` and `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sends `parameters` the way the method expects them.
    ///
    /// GET requests with non-empty parameters carry them as the query
    /// string. Every other method carries them as the body.
    #[must_use]
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        if self.http_method == HttpMethod::Get {
            for (key, value) in &parameters {
                if let Some(value) = parameter_text(value) {
                    self.query.push((key.clone(), value));
                }
            }
        } else {
            self.body = Some(serde_json::Value::Object(parameters));
        }
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
