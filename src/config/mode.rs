//! Library working mode.
//!
//! This module provides the [`Mode`] enum, which selects between the PinMeTo
//! production API and its sandbox.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Production API host.
pub const LIVE_HOST: &str = "https://api.pinmeto.com";

/// Sandbox API host.
pub const TEST_HOST: &str = "https://api.test.pinmeto.com";

/// The library working mode.
///
/// Only the exact strings `"live"` and `"test"` are accepted when parsing.
///
/// # Example
///
/// ```rust
/// use pinmeto_api::Mode;
///
/// let mode: Mode = "live".parse().unwrap();
/// assert_eq!(mode, Mode::Live);
/// assert_eq!(mode.base_url(), "https://api.pinmeto.com");
///
/// assert!("staging".parse::<Mode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Production API at `api.pinmeto.com`.
    Live,
    /// Sandbox API at `api.test.pinmeto.com`.
    #[default]
    Test,
}

impl Mode {
    /// Returns the base URL of the API host for this mode.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Live => LIVE_HOST,
            Self::Test => TEST_HOST,
        }
    }

    /// Returns the mode as its configuration string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Self::Live),
            "test" => Ok(Self::Test),
            "" => Err(ConfigError::MissingMode),
            other => Err(ConfigError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
