//! HTTP client types for PinMeTo API communication.
//!
//! This module provides the transport layer underneath
//! [`PinmetoClient`](crate::PinmetoClient): request descriptors, resource
//! classification, URL and header resolution, and raw responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`DataType`]: Content types for request bodies
//! - [`ResourceFamily`]: Which API prefix and auth scheme a resource call uses
//!
//! # Example
//!
//! ```rust,ignore
//! use pinmeto_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "locations")
//!     .query_param("pagesize", "50")
//!     .build()?;
//!
//! let response = client.request(&request, Some(&access_token)).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is attempted exactly once.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod path;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    encode_pairs, DataType, HttpMethod, HttpRequest, HttpRequestBuilder, Parameters,
};
pub use http_response::HttpResponse;
pub use path::{build_url, ResourceFamily, LISTINGS_API_VERSION, LOCATIONS_API_VERSION};
