//! OAuth 2.0 Client Credentials Grant against the PinMeTo token endpoint.
//!
//! The app credentials are sent as HTTP Basic authorization, with a
//! form-encoded body carrying only the grant type:
//!
//! ```text
//! POST {host}/oauth/token
//! Authorization: Basic base64(app_id:app_secret)
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=client_credentials
//! ```
//!
//! The response is expected to be `{"access_token": "...", "expires_in": N}`.

use crate::auth::token::AccessToken;
use crate::auth::AuthError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use serde_json::json;

/// Resource call of the token endpoint.
pub const TOKEN_ENDPOINT: &str = "oauth/token";

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Builds the token request.
///
/// # Errors
///
/// Never fails in practice; the error type is that of request validation.
pub fn client_credentials_request() -> Result<HttpRequest, AuthError> {
    HttpRequest::builder(HttpMethod::Post, TOKEN_ENDPOINT)
        .body(json!({ "grant_type": CLIENT_CREDENTIALS_GRANT_TYPE }))
        .build()
        .map_err(|e| AuthError::HttpError(e.into()))
}

/// Exchanges the app credentials for an access token.
///
/// The token is not cached here; see
/// [`PinmetoClient::ensure_token`](crate::PinmetoClient::ensure_token).
///
/// # Errors
///
/// - [`AuthError::HttpError`] if the request could not be sent
/// - [`AuthError::MissingAccessToken`] if the response carries no token
pub async fn exchange_client_credentials(http: &HttpClient) -> Result<AccessToken, AuthError> {
    let request = client_credentials_request()?;
    let response = http.request(&request, None).await?;

    let token = AccessToken::from_response_body(response.code, &response.body)?;

    tracing::info!(
        expires_in = ?token.expires_in(),
        "Obtained PinMeTo access token"
    );

    Ok(token)
}
