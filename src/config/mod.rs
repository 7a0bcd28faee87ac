//! Configuration types for the PinMeTo API client.
//!
//! This module provides the configuration types used to initialize
//! a [`PinmetoClient`](crate::PinmetoClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PinmetoConfig`]: The validated configuration holding credentials and mode
//! - [`PinmetoConfigBuilder`]: A builder for constructing [`PinmetoConfig`] instances
//! - [`RawConfig`]: An unvalidated configuration record, e.g. deserialized from a file
//! - [`AppId`], [`AppSecret`], [`AccountId`]: Validated credential newtypes
//! - [`HostUrl`]: A validated API host override
//! - [`Mode`]: The working mode selecting production or sandbox
//!
//! # Example
//!
//! ```rust
//! use pinmeto_api::{PinmetoConfig, AppId, AppSecret, AccountId, Mode};
//!
//! let config = PinmetoConfig::builder()
//!     .app_id(AppId::new("my-app-id").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .account_id(AccountId::new("my-account").unwrap())
//!     .mode(Mode::Live)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.pinmeto.com");
//! ```

mod mode;
mod newtypes;

pub use mode::{Mode, LIVE_HOST, TEST_HOST};
pub use newtypes::{AccountId, AppId, AppSecret, HostUrl};

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Environment variable holding the `App ID`.
pub const ENV_APP_ID: &str = "PINMETO_APP_ID";
/// Environment variable holding the `App Secret`.
pub const ENV_APP_SECRET: &str = "PINMETO_APP_SECRET";
/// Environment variable holding the `Account ID`.
pub const ENV_ACCOUNT_ID: &str = "PINMETO_ACCOUNT_ID";
/// Environment variable holding the working mode (defaults to `test`).
pub const ENV_MODE: &str = "PINMETO_MODE";
/// Environment variable holding an optional API host override.
pub const ENV_API_HOST: &str = "PINMETO_API_HOST";

/// Validated configuration for the PinMeTo API client.
///
/// Credentials and mode are immutable once built.
///
/// # Thread Safety
///
/// `PinmetoConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct PinmetoConfig {
    app_id: AppId,
    app_secret: AppSecret,
    account_id: AccountId,
    mode: Mode,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl PinmetoConfig {
    /// Creates a new builder for constructing a `PinmetoConfig`.
    #[must_use]
    pub fn builder() -> PinmetoConfigBuilder {
        PinmetoConfigBuilder::new()
    }

    /// Loads the configuration from `PINMETO_*` environment variables.
    ///
    /// `PINMETO_MODE` defaults to `test` when unset. Credentials default to
    /// the empty string and are therefore rejected when unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any credential is empty, the mode is
    /// invalid, or `PINMETO_API_HOST` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        RawConfig::from_lookup(|key| std::env::var(key).ok()).try_into()
    }

    /// Returns the app ID.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the account ID.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the working mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// This is the host override when one is configured, otherwise the host
    /// selected by the working mode.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_host
            .as_ref()
            .map_or_else(|| self.mode.base_url(), |host| host.as_ref())
    }
}

// Verify PinmetoConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PinmetoConfig>();
};

/// Builder for constructing [`PinmetoConfig`] instances.
///
/// Required fields are `app_id`, `app_secret`, `account_id` and `mode`.
///
/// # Example
///
/// ```rust
/// use pinmeto_api::{PinmetoConfig, AppId, AppSecret, AccountId, Mode, HostUrl};
///
/// let config = PinmetoConfig::builder()
///     .app_id(AppId::new("id").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .account_id(AccountId::new("account").unwrap())
///     .mode(Mode::Test)
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "http://localhost:8080");
/// ```
#[derive(Debug, Default)]
pub struct PinmetoConfigBuilder {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    account_id: Option<AccountId>,
    mode: Option<Mode>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl PinmetoConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app ID (required).
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the account ID (required).
    #[must_use]
    pub fn account_id(mut self, id: AccountId) -> Self {
        self.account_id = Some(id);
        self
    }

    /// Sets the working mode (required).
    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Overrides the mode-derived API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PinmetoConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a credential is not
    /// set, or [`ConfigError::MissingMode`] if the mode is not set.
    pub fn build(self) -> Result<PinmetoConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;
        let account_id = self
            .account_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "account_id",
            })?;
        let mode = self.mode.ok_or(ConfigError::MissingMode)?;

        Ok(PinmetoConfig {
            app_id,
            app_secret,
            account_id,
            mode,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// An unvalidated configuration record.
///
/// This is the shape a hosting application hands over, e.g. deserialized
/// from a settings file. Convert it with `PinmetoConfig::try_from`.
///
/// ```rust
/// use pinmeto_api::{PinmetoConfig, RawConfig};
///
/// let raw: RawConfig = serde_json::from_str(r#"{
///     "app_id": "id",
///     "app_secret": "secret",
///     "account_id": "account",
///     "mode": "test"
/// }"#).unwrap();
///
/// let config = PinmetoConfig::try_from(raw).unwrap();
/// assert_eq!(config.base_url(), "https://api.test.pinmeto.com");
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct RawConfig {
    /// The PinMeTo `App ID`.
    #[serde(default)]
    pub app_id: String,
    /// The PinMeTo `App Secret`.
    #[serde(default)]
    pub app_secret: String,
    /// The PinMeTo `Account ID`.
    #[serde(default)]
    pub account_id: String,
    /// The working mode, `live` or `test`.
    #[serde(default)]
    pub mode: Option<String>,
    /// Optional API host override.
    #[serde(default)]
    pub api_host: Option<String>,
}

impl RawConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            app_id: lookup(ENV_APP_ID).unwrap_or_default(),
            app_secret: lookup(ENV_APP_SECRET).unwrap_or_default(),
            account_id: lookup(ENV_ACCOUNT_ID).unwrap_or_default(),
            mode: Some(lookup(ENV_MODE).unwrap_or_else(|| Mode::default().to_string())),
            api_host: lookup(ENV_API_HOST).filter(|host| !host.is_empty()),
        }
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("app_id", &self.app_id)
            .field("app_secret", &"*****")
            .field("account_id", &self.account_id)
            .field("mode", &self.mode)
            .field("api_host", &self.api_host)
            .finish()
    }
}

impl TryFrom<RawConfig> for PinmetoConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let app_id = AppId::new(raw.app_id)?;
        let app_secret = AppSecret::new(raw.app_secret)?;
        let account_id = AccountId::new(raw.account_id)?;
        let mode: Mode = raw.mode.ok_or(ConfigError::MissingMode)?.parse()?;

        let mut builder = PinmetoConfig::builder()
            .app_id(app_id)
            .app_secret(app_secret)
            .account_id(account_id)
            .mode(mode);

        if let Some(host) = raw.api_host {
            builder = builder.api_host(HostUrl::new(host)?);
        }

        builder.build()
    }
}
