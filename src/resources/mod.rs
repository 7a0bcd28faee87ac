//! Resource methods of [`PinmetoClient`](crate::PinmetoClient).
//!
//! Each method translates typed arguments into a resource call and delegates
//! to [`PinmetoClient::request`](crate::PinmetoClient::request) or
//! [`PinmetoClient::send`](crate::PinmetoClient::send). Responses are
//! returned raw.
//!
//! | Method             | Request                                            |
//! |--------------------|----------------------------------------------------|
//! | `get_locations`    | `GET  /v2/{account}/locations`                     |
//! | `get_location`     | `GET  /v2/{account}/locations/{store_id}`          |
//! | `create_location`  | `POST /v2/{account}/locations[?upsert=true]`       |
//! | `update_location`  | `PUT  /v2/{account}/locations/{store_id}`          |
//! | `get_metrics`      | `GET  /listings/v3/{account}/insights/{source}/{store_id}` |
//! | `get_keywords`     | `GET  /listings/v3/{account}/insights/google-keywords/{store_id}` |
//! | `get_ratings`      | `GET  /listings/v3/{account}/ratings/{source}/{store_id}` |
//!
//! For the listings reports an absent store ID leaves an empty trailing
//! segment, e.g. `insights/google/`. Store IDs are percent-encoded as a
//! single path segment, so `/`, `?` and `#` stay inside it.

mod insights;
mod locations;

pub use insights::InsightSource;
pub use locations::LocationsQuery;

use std::borrow::Cow;

use thiserror::Error;

/// Percent-encodes a store ID for use as one path segment.
pub(crate) fn store_segment(store_id: &str) -> Cow<'_, str> {
    urlencoding::encode(store_id)
}

/// Encoded store segment of a listings report, empty for all locations.
pub(crate) fn optional_store_segment(store_id: Option<&str>) -> Cow<'_, str> {
    store_id.map_or(Cow::Borrowed(""), store_segment)
}

/// Errors raised for unsupported arguments, before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The metrics or ratings source is not `google` or `facebook`.
    #[error("Invalid source '{source_name}'. You need to provide a valid source: `google` or `facebook`.")]
    InvalidSource {
        /// The source that was provided.
        source_name: String,
    },
}
