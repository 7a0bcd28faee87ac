//! HTTP client for PinMeTo API communication.
//!
//! This module provides the [`HttpClient`] type, which resolves the full URL
//! and the authorization headers of a request and performs the call.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::path::{build_url, ResourceFamily};
use crate::config::PinmetoConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the PinMeTo API.
///
/// The client handles:
/// - Base URI resolution from the working mode or the host override
/// - Path prefixes per [`ResourceFamily`]
/// - Basic authorization for the token endpoint, Bearer for everything else
/// - Default headers including User-Agent
///
/// It does not retry and does not translate non-2xx responses.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    account_id: String,
    basic_credentials: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PinmetoConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}PinMeTo API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let basic_credentials = STANDARD.encode(format!(
            "{}:{}",
            config.app_id().as_ref(),
            config.app_secret().as_ref()
        ));

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.base_url().to_string(),
            account_id: config.account_id().to_string(),
            basic_credentials,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the account ID embedded in locations and listings paths.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request is sent to, including its query string.
    #[must_use]
    pub fn url(&self, request: &HttpRequest) -> String {
        let url = build_url(&self.base_uri, &self.account_id, &request.path);
        if request.query.is_empty() {
            url
        } else {
            format!("{url}?{}", request.query_string())
        }
    }

    /// Returns the `Authorization` header value for a request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBearerToken`] if the request
    /// needs a Bearer token and none was given.
    pub fn authorization(
        &self,
        request: &HttpRequest,
        bearer_token: Option<&str>,
    ) -> Result<String, InvalidHttpRequestError> {
        if !ResourceFamily::classify(&request.path).uses_bearer() {
            return Ok(format!("Basic {}", self.basic_credentials));
        }

        bearer_token
            .map(|token| format!("Bearer {token}"))
            .ok_or_else(|| InvalidHttpRequestError::MissingBearerToken {
                path: request.path.clone(),
            })
    }

    /// Sends an HTTP request to the PinMeTo API.
    ///
    /// `bearer_token` is required for every resource call except the token
    /// endpoint, which authenticates with the app credentials instead.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    ///
    /// Non-2xx responses are returned as `Ok`.
    pub async fn request(
        &self,
        request: &HttpRequest,
        bearer_token: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let family = ResourceFamily::classify(&request.path);
        let data_type = family.data_type();
        let url = self.url(request);
        let authorization = self.authorization(request, bearer_token)?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder
            .header("Content-Type", data_type.as_content_type())
            .header("Authorization", authorization);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(data_type.encode_body(body)?);
        }

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            "Sending request to PinMeTo API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, path = %request.path, "Received PinMeTo API response");

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("account_id", &self.account_id)
            .field("basic_credentials", &"*****")
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountId, AppId, AppSecret, HostUrl, Mode};

    fn create_test_config(mode: Mode) -> PinmetoConfig {
        PinmetoConfig::builder()
            .app_id(AppId::new("test-app").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap())
            .account_id(AccountId::new("acc-1").unwrap())
            .mode(mode)
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_uri_follows_mode() {
        let test = HttpClient::new(&create_test_config(Mode::Test));
        let live = HttpClient::new(&create_test_config(Mode::Live));

        assert_eq!(test.base_uri(), "https://api.test.pinmeto.com");
        assert_eq!(live.base_uri(), "https://api.pinmeto.com");
    }

    #[test]
    fn test_base_uri_uses_host_override() {
        let config = PinmetoConfig::builder()
            .app_id(AppId::new("test-app").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap())
            .account_id(AccountId::new("acc-1").unwrap())
            .mode(Mode::Live)
            .api_host(HostUrl::new("http://localhost:8080").unwrap())
            .build()
            .unwrap();

        assert_eq!(HttpClient::new(&config).base_uri(), "http://localhost:8080");
    }

    #[test]
    fn test_url_includes_prefix_and_query() {
        let client = HttpClient::new(&create_test_config(Mode::Test));
        let request = HttpRequest::builder(HttpMethod::Get, "locations")
            .query_param("pagesize", "50")
            .build()
            .unwrap();

        assert_eq!(
            client.url(&request),
            "https://api.test.pinmeto.com/v2/acc-1/locations?pagesize=50"
        );
    }

    #[test]
    fn test_token_endpoint_uses_basic_authorization() {
        let client = HttpClient::new(&create_test_config(Mode::Test));
        let request = HttpRequest::builder(HttpMethod::Post, "oauth/token")
            .build()
            .unwrap();

        let expected = format!("Basic {}", STANDARD.encode("test-app:test-secret"));
        assert_eq!(client.authorization(&request, None).unwrap(), expected);
        // A bearer token is ignored for the token endpoint.
        assert_eq!(
            client.authorization(&request, Some("abc")).unwrap(),
            expected
        );
    }

    #[test]
    fn test_resource_calls_use_bearer_authorization() {
        let client = HttpClient::new(&create_test_config(Mode::Test));
        let request = HttpRequest::builder(HttpMethod::Get, "locations/store42")
            .build()
            .unwrap();

        assert_eq!(
            client.authorization(&request, Some("abc")).unwrap(),
            "Bearer abc"
        );
        assert!(matches!(
            client.authorization(&request, None),
            Err(InvalidHttpRequestError::MissingBearerToken { path }) if path == "locations/store42"
        ));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config(Mode::Test));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("PinMeTo API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PinmetoConfig::builder()
            .app_id(AppId::new("test-app").unwrap())
            .app_secret(AppSecret::new("test-secret").unwrap())
            .account_id(AccountId::new("acc-1").unwrap())
            .mode(Mode::Test)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_debug_masks_credentials() {
        let client = HttpClient::new(&create_test_config(Mode::Test));
        let debug = format!("{client:?}");
        assert!(!debug.contains(&STANDARD.encode("test-app:test-secret")));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
