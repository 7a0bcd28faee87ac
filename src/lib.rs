//! # PinMeTo API Rust Client
//!
//! A Rust client for the PinMeTo API, covering location management and the
//! Google/Facebook listings reports (metrics, keywords, ratings).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PinmetoConfig`] and [`PinmetoConfigBuilder`]
//! - Validated newtypes for API credentials
//! - OAuth 2.0 client credentials authentication via [`auth`]
//! - Token caching through an injected [`TokenCache`]
//! - Raw-body responses with opt-in JSON decoding
//!
//! ## Quick Start
//!
//! ```rust
//! use pinmeto_api::{PinmetoConfig, AppId, AppSecret, AccountId, Mode};
//!
//! let config = PinmetoConfig::builder()
//!     .app_id(AppId::new("your-app-id").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .account_id(AccountId::new("your-account-id").unwrap())
//!     .mode(Mode::Test)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.test.pinmeto.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pinmeto_api::{InMemoryTokenCache, LocationsQuery, PinmetoClient};
//!
//! // Authenticates immediately
//! let client = PinmetoClient::new(config, Arc::new(InMemoryTokenCache::new())).await?;
//!
//! let page = client.get_locations(&LocationsQuery::new().pagesize(50)).await?;
//! let metrics = client
//!     .get_metrics("google", "2024-01-01", "2024-01-31", &["reach"], Some("store42"))
//!     .await?;
//!
//! println!("{}", metrics.json()?);
//! ```
//!
//! Credentials can also be read from `PINMETO_APP_ID`, `PINMETO_APP_SECRET`,
//! `PINMETO_ACCOUNT_ID` and `PINMETO_MODE` with [`PinmetoConfig::from_env`].
//!
//! ## Design Principles
//!
//! - **No global state**: The token cache is passed in explicitly
//! - **Fail-fast validation**: Credentials and mode are validated on construction
//! - **Raw responses**: Non-2xx responses are returned, not turned into errors
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use client::PinmetoClient;

pub use config::{
    AccountId, AppId, AppSecret, HostUrl, Mode, PinmetoConfig, PinmetoConfigBuilder, RawConfig,
};
pub use error::{ConfigError, PinmetoError};

pub use auth::{AuthError, InMemoryTokenCache, TokenCache};

pub use clients::{HttpError, HttpMethod, HttpResponse, Parameters};

pub use resources::{InsightSource, LocationsQuery, ValidationError};
