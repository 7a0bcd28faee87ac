//! Authentication error types for the PinMeTo API client.
//!
//! # Example
//!
//! ```rust
//! use pinmeto_api::auth::AuthError;
//!
//! let error = AuthError::MissingAccessToken {
//!     status: 401,
//!     body: r#"{"error":"invalid_client"}"#.to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
///
/// None of these are retried automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered without an access token.
    ///
    /// This covers rejected credentials as well as bodies that are not JSON
    /// or lack a non-empty `access_token`.
    #[error("Could not retrieve the token's value (status {status}): {body}")]
    MissingAccessToken {
        /// The HTTP status code returned by the token endpoint.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The token request could not be sent.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_missing_access_token_includes_status_and_body() {
        let error = AuthError::MissingAccessToken {
            status: 401,
            body: "invalid_client".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid_client"));
        assert!(message.contains("token's value"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        let auth_error: AuthError = http_error.into();
        assert!(matches!(
            auth_error,
            AuthError::HttpError(HttpError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_auth_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthError>();
    }
}
