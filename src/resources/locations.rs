//! Location CRUD.

use serde::Serialize;

use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse, Parameters};
use crate::error::PinmetoError;
use crate::resources::store_segment;
use crate::PinmetoClient;

/// Paging options for [`PinmetoClient::get_locations`].
///
/// # Example
///
/// ```rust
/// use pinmeto_api::LocationsQuery;
///
/// let query = LocationsQuery::new().pagesize(50);
/// let params = query.to_parameters();
/// assert_eq!(params["pagesize"], 50);
/// assert!(!params.contains_key("next"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocationsQuery {
    /// Number of locations to return (API default 100, maximum 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<u32>,
    /// ID of the starting point of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// ID of the starting point of the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl LocationsQuery {
    /// Creates a query with no options set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn pagesize(mut self, pagesize: u32) -> Self {
        self.pagesize = Some(pagesize);
        self
    }

    /// Sets the cursor of the next page.
    #[must_use]
    pub fn next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Sets the cursor of the previous page.
    #[must_use]
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Converts the set options to request parameters, in declaration order.
    #[must_use]
    pub fn to_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        if let Some(pagesize) = self.pagesize {
            parameters.insert("pagesize".to_string(), pagesize.into());
        }
        if let Some(next) = &self.next {
            parameters.insert("next".to_string(), next.clone().into());
        }
        if let Some(before) = &self.before {
            parameters.insert("before".to_string(), before.clone().into());
        }
        parameters
    }
}

impl PinmetoClient {
    /// Lists locations, one page at a time.
    ///
    /// # Errors
    ///
    /// See [`PinmetoClient::request`].
    pub async fn get_locations(&self, query: &LocationsQuery) -> Result<HttpResponse, PinmetoError> {
        self.request("locations", query.to_parameters(), HttpMethod::Get)
            .await
    }

    /// Fetches a single location.
    ///
    /// # Errors
    ///
    /// See [`PinmetoClient::request`].
    pub async fn get_location(&self, store_id: &str) -> Result<HttpResponse, PinmetoError> {
        self.request(
            &format!("locations/{}", store_segment(store_id)),
            Parameters::new(),
            HttpMethod::Get,
        )
        .await
    }

    /// Creates a location, or updates it when `upsert` is set and the store
    /// ID already exists.
    ///
    /// # Errors
    ///
    /// See [`PinmetoClient::request`].
    pub async fn create_location(
        &self,
        location: serde_json::Value,
        upsert: bool,
    ) -> Result<HttpResponse, PinmetoError> {
        let mut builder = HttpRequest::builder(HttpMethod::Post, "locations").body(location);
        if upsert {
            builder = builder.query_param("upsert", "true");
        }
        let request = builder.build().map_err(HttpError::from)?;

        self.send(&request).await
    }

    /// Updates an existing location.
    ///
    /// # Errors
    ///
    /// See [`PinmetoClient::request`].
    pub async fn update_location(
        &self,
        store_id: &str,
        location: serde_json::Value,
    ) -> Result<HttpResponse, PinmetoError> {
        let call = format!("locations/{}", store_segment(store_id));
        let request = HttpRequest::builder(HttpMethod::Put, call)
            .body(location)
            .build()
            .map_err(HttpError::from)?;

        self.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_parameters() {
        assert!(LocationsQuery::new().to_parameters().is_empty());
    }

    #[test]
    fn test_query_parameters_keep_order() {
        let params = LocationsQuery::new()
            .before("b-1")
            .next("n-1")
            .pagesize(25)
            .to_parameters();

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["pagesize", "next", "before"]);
    }

    #[test]
    fn test_query_serializes_only_set_fields() {
        let json = serde_json::to_value(LocationsQuery::new().next("n-1")).unwrap();
        assert_eq!(json, serde_json::json!({"next": "n-1"}));
    }
}
