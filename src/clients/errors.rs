//! HTTP-specific error types for the PinMeTo API client.
//!
//! Non-2xx responses are deliberately absent here: the API's status and body
//! are handed back to the caller as an [`HttpResponse`](crate::HttpResponse).
//! These errors only cover requests that could not be built or sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use pinmeto_api::clients::HttpError;
//!
//! match http_client.request(&request, Some(&token)).await {
//!     Ok(response) => println!("{}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use pinmeto_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with get requests.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,

    /// A body was attached to a method that sends parameters in the query string.
    #[error("Cannot send a body with {method} requests.")]
    BodyNotAllowed {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// A form-encoded body must be a flat JSON object.
    #[error("Form-encoded bodies must be JSON objects.")]
    InvalidFormBody,

    /// A Bearer-authenticated request was sent without a token.
    #[error("Cannot call '{path}' without an access token.")]
    MissingBearerToken {
        /// The path of the request.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
