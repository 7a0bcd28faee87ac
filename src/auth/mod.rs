//! Authentication for the PinMeTo API.
//!
//! PinMeTo uses the OAuth 2.0 client credentials grant: the app ID and secret
//! are exchanged for a bearer token, which is then sent with every locations
//! and listings request until it expires.
//!
//! # Overview
//!
//! - [`exchange_client_credentials`]: Performs the token exchange
//! - [`AccessToken`]: A token with its declared lifetime
//! - [`TokenCache`]: Where the token is kept between requests
//! - [`InMemoryTokenCache`]: A process-local [`TokenCache`]
//! - [`AuthError`]: Token exchange failures
//!
//! Token reuse and refresh are driven by
//! [`PinmetoClient::ensure_token`](crate::PinmetoClient::ensure_token).

mod cache;
mod client_credentials;
mod error;
mod token;

pub use cache::{InMemoryTokenCache, TokenCache};
pub use client_credentials::{
    client_credentials_request, exchange_client_credentials, TOKEN_ENDPOINT,
};
pub use error::AuthError;
pub use token::{AccessToken, TOKEN_CACHE_KEY};
