//! Error types for the PinMeTo API client.
//!
//! This module contains [`ConfigError`], raised while validating credentials
//! and the operating mode, and [`PinmetoError`], the unified error returned by
//! every [`PinmetoClient`](crate::PinmetoClient) operation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use pinmeto_api::{AppId, ConfigError};
//!
//! let result = AppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppId)));
//! ```

use crate::auth::AuthError;
use crate::clients::HttpError;
use crate::resources::ValidationError;
use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message. None of these
/// errors are retried: they always indicate a caller-side mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App ID cannot be empty.
    #[error("App ID cannot be empty. Please provide the PinMeTo `App ID` from your account settings.")]
    EmptyAppId,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide the PinMeTo `App Secret` from your account settings.")]
    EmptyAppSecret,

    /// Account ID cannot be empty.
    #[error("Account ID cannot be empty. Please provide the PinMeTo `Account ID` from your account settings.")]
    EmptyAccountId,

    /// The working mode was not provided.
    #[error("Missing working mode. Please provide the library working mode: `live` or `test`.")]
    MissingMode,

    /// The working mode is not one of the supported values.
    #[error("Invalid working mode '{mode}'. Expected `live` or `test`.")]
    InvalidMode {
        /// The invalid mode that was provided.
        mode: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for [`PinmetoClient`](crate::PinmetoClient) operations.
///
/// Non-2xx API responses are not errors: they are returned as an
/// [`HttpResponse`](crate::HttpResponse) for the caller to inspect.
///
/// # Example
///
/// ```rust,ignore
/// use pinmeto_api::PinmetoError;
///
/// match client.get_location("store42").await {
///     Ok(response) => println!("{}: {}", response.code, response.body),
///     Err(PinmetoError::Authentication(e)) => eprintln!("auth failed: {e}"),
///     Err(PinmetoError::Validation(e)) => eprintln!("bad input: {e}"),
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum PinmetoError {
    /// Credentials or mode are missing or invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The token exchange did not yield an access token.
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// The caller supplied an unsupported argument.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be sent or its response could not be read.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify PinmetoError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PinmetoError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_app_id_error_message() {
        let error = ConfigError::EmptyAppId;
        let message = error.to_string();
        assert!(message.contains("App ID cannot be empty"));
        assert!(message.contains("account settings"));
    }

    #[test]
    fn test_invalid_mode_error_message() {
        let error = ConfigError::InvalidMode {
            mode: "staging".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("staging"));
        assert!(message.contains("`live` or `test`"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "app_id" };
        let message = error.to_string();
        assert!(message.contains("app_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_pinmeto_error_wraps_config_error_transparently() {
        let error: PinmetoError = ConfigError::MissingMode.into();
        assert!(matches!(
            error,
            PinmetoError::Configuration(ConfigError::MissingMode)
        ));
        assert_eq!(error.to_string(), ConfigError::MissingMode.to_string());
    }

    #[test]
    fn test_pinmeto_error_wraps_validation_error() {
        let error: PinmetoError = ValidationError::InvalidSource {
            source_name: "bing".to_string(),
        }
        .into();
        assert!(matches!(error, PinmetoError::Validation(_)));
        assert!(error.to_string().contains("bing"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAppSecret;
        let _: &dyn std::error::Error = &error;
    }
}
