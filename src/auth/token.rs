//! Access token types.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::auth::AuthError;

/// Cache key the access token is stored under.
pub const TOKEN_CACHE_KEY: &str = "_pinmeto_token";

/// A bearer token together with its declared lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_in: Option<u64>,
}

impl AccessToken {
    /// Parses the raw body returned by the token endpoint.
    ///
    /// Only `access_token` is required. `expires_in` is read from an integer,
    /// a float or a numeric string; any other shape counts as absent. Other
    /// fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingAccessToken`] if the body is not JSON or
    /// carries no non-empty string `access_token`.
    pub fn from_response_body(status: u16, body: &str) -> Result<Self, AuthError> {
        let missing = || AuthError::MissingAccessToken {
            status,
            body: body.to_string(),
        };

        let response: Value = serde_json::from_str(body).map_err(|_| missing())?;
        let value = response
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(missing)?
            .to_string();

        Ok(Self {
            value,
            expires_in: response.get("expires_in").and_then(lifetime_seconds),
        })
    }

    /// Returns the token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the declared lifetime in seconds, if any.
    #[must_use]
    pub const fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Returns the time the token may be cached for.
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.expires_in.map(Duration::from_secs)
    }

    /// Consumes the token, returning its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

/// Reads a lifetime in whole seconds. Fractions are dropped and negative
/// values count as already expired.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lifetime_seconds(value: &Value) -> Option<u64> {
    let seconds = match value {
        Value::Number(number) => match number.as_u64() {
            Some(seconds) => return Some(seconds),
            None => number.as_f64()?,
        },
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !seconds.is_finite() {
        return None;
    }

    Some(seconds.max(0.0) as u64)
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"*****")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
