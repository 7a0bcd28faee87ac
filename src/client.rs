//! The authenticated PinMeTo API client.
//!
//! [`PinmetoClient`] ties together the configuration, the HTTP transport and
//! the token cache. Construction validates nothing further (the
//! [`PinmetoConfig`] is already valid) but authenticates right away, so a
//! client that exists has obtained a token at least once.
//!
//! The resource methods (`get_locations`, `get_metrics`, ...) live in
//! [`crate::resources`].

use std::fmt;
use std::sync::Arc;

use crate::auth::{exchange_client_credentials, TokenCache, TOKEN_CACHE_KEY};
use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Parameters, ResourceFamily,
};
use crate::config::{PinmetoConfig, RawConfig};
use crate::error::PinmetoError;

/// Client for the PinMeTo locations and listings API.
///
/// # Thread Safety
///
/// `PinmetoClient` is `Send + Sync`. Concurrent calls that find the cache
/// empty each fetch their own token; the last one written wins.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use pinmeto_api::{InMemoryTokenCache, PinmetoClient, PinmetoConfig};
///
/// let config = PinmetoConfig::from_env()?;
/// let client = PinmetoClient::new(config, Arc::new(InMemoryTokenCache::new())).await?;
///
/// let response = client.get_location("store42").await?;
/// if response.is_ok() {
///     let location = response.json()?;
///     println!("{}", location["name"]);
/// }
/// ```
pub struct PinmetoClient {
    config: PinmetoConfig,
    http: HttpClient,
    cache: Arc<dyn TokenCache>,
}

// Verify PinmetoClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PinmetoClient>();
};

impl PinmetoClient {
    /// Creates a client and authenticates immediately.
    ///
    /// If `cache` already holds a live token, no token request is made.
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError::Authentication`] if the token exchange fails.
    pub async fn new(
        config: PinmetoConfig,
        cache: Arc<dyn TokenCache>,
    ) -> Result<Self, PinmetoError> {
        let http = HttpClient::new(&config);
        let client = Self {
            config,
            http,
            cache,
        };
        client.ensure_token().await?;
        Ok(client)
    }

    /// Validates a raw configuration record, then behaves like [`Self::new`].
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError::Configuration`] for missing or invalid
    /// credentials or mode, and [`PinmetoError::Authentication`] if the
    /// token exchange fails.
    pub async fn from_raw(
        raw: RawConfig,
        cache: Arc<dyn TokenCache>,
    ) -> Result<Self, PinmetoError> {
        let config = PinmetoConfig::try_from(raw)?;
        Self::new(config, cache).await
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &PinmetoConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Returns a live access token, fetching a new one on a cache miss.
    ///
    /// A missing and an expired cache entry are treated the same. The token
    /// is stored for the `expires_in` seconds declared by the API and is
    /// never invalidated early.
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError::Authentication`] if the token exchange fails.
    pub async fn ensure_token(&self) -> Result<String, PinmetoError> {
        if let Some(token) = self.cache.get(TOKEN_CACHE_KEY) {
            tracing::debug!("Using cached PinMeTo access token");
            return Ok(token);
        }

        tracing::debug!("No cached PinMeTo access token, requesting a new one");
        let token = exchange_client_credentials(&self.http).await?;
        let ttl = token.ttl();
        let value = token.into_value();
        self.cache.put(TOKEN_CACHE_KEY, value.clone(), ttl);

        Ok(value)
    }

    /// Performs a generic API call.
    ///
    /// `resource_call` is the path below the API prefix, e.g. `locations` or
    /// `insights/google/store42`. For GET, non-empty `parameters` become the
    /// query string; for other methods they are sent as the body.
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError`] if the token cannot be obtained or the
    /// request cannot be sent. Non-2xx responses are returned as `Ok`.
    pub async fn request(
        &self,
        resource_call: &str,
        parameters: Parameters,
        method: HttpMethod,
    ) -> Result<HttpResponse, PinmetoError> {
        let request = HttpRequest::builder(method, resource_call)
            .parameters(parameters)
            .build()
            .map_err(HttpError::from)?;

        self.send(&request).await
    }

    /// Sends a prepared request, attaching a Bearer token where needed.
    ///
    /// # Errors
    ///
    /// Same as [`Self::request`].
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, PinmetoError> {
        let token = if ResourceFamily::classify(&request.path).uses_bearer() {
            Some(self.ensure_token().await?)
        } else {
            None
        };

        Ok(self.http.request(request, token.as_deref()).await?)
    }
}

impl fmt::Debug for PinmetoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinmetoClient")
            .field("config", &self.config)
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}
