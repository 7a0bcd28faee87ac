//! Resource classification and URL construction.
//!
//! Every resource call falls into one [`ResourceFamily`], which decides the
//! path prefix, the authorization scheme, and the body content type:
//!
//! | Resource call contains | Family      | URL                                          | Auth   |
//! |------------------------|-------------|----------------------------------------------|--------|
//! | `token`                | `Token`     | `{host}/{call}`                              | Basic  |
//! | `google` / `facebook`  | `Listings`  | `{host}/listings/v3/{account_id}/{call}`     | Bearer |
//! | anything else          | `Locations` | `{host}/v2/{account_id}/{call}`              | Bearer |
//!
//! Classification is a plain substring match on the whole resource call, so a
//! store ID that happens to contain `google` routes to the listings API too.
//!
//! # Example
//!
//! ```rust
//! use pinmeto_api::clients::{build_url, ResourceFamily};
//!
//! assert_eq!(ResourceFamily::classify("oauth/token"), ResourceFamily::Token);
//! assert_eq!(ResourceFamily::classify("ratings/facebook/"), ResourceFamily::Listings);
//! assert_eq!(ResourceFamily::classify("locations/42"), ResourceFamily::Locations);
//!
//! let url = build_url("https://api.test.pinmeto.com", "acc", "locations/42");
//! assert_eq!(url, "https://api.test.pinmeto.com/v2/acc/locations/42");
//! ```

use crate::clients::http_request::DataType;

/// API version serving the locations endpoints.
pub const LOCATIONS_API_VERSION: &str = "2";

/// API version serving the listings (metrics, keywords, ratings) endpoints.
pub const LISTINGS_API_VERSION: &str = "3";

/// The group of endpoints a resource call belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    /// The OAuth token endpoint.
    Token,
    /// Google and Facebook insights, keywords and ratings.
    Listings,
    /// Location CRUD.
    Locations,
}

impl ResourceFamily {
    /// Classifies a resource call.
    #[must_use]
    pub fn classify(resource_call: &str) -> Self {
        if resource_call.contains("token") {
            Self::Token
        } else if resource_call.contains("google") || resource_call.contains("facebook") {
            Self::Listings
        } else {
            Self::Locations
        }
    }

    /// Returns the content type requests of this family are sent with.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Token => DataType::FormUrlEncoded,
            Self::Listings | Self::Locations => DataType::Json,
        }
    }

    /// Returns `true` if requests of this family use Bearer authorization.
    #[must_use]
    pub const fn uses_bearer(&self) -> bool {
        !matches!(self, Self::Token)
    }

    /// Returns the path prefix placed between the host and the resource call.
    #[must_use]
    pub fn prefix(&self, account_id: &str) -> String {
        match self {
            Self::Token => String::new(),
            Self::Listings => format!("/listings/v{LISTINGS_API_VERSION}/{account_id}"),
            Self::Locations => format!("/v{LOCATIONS_API_VERSION}/{account_id}"),
        }
    }
}

/// Builds the full URL for a resource call, without query string.
#[must_use]
pub fn build_url(base_url: &str, account_id: &str, resource_call: &str) -> String {
    let prefix = ResourceFamily::classify(resource_call).prefix(account_id);
    format!("{base_url}{prefix}/{resource_call}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "https://api.test.pinmeto.com";

    #[test]
    fn test_token_call_is_appended_to_host() {
        assert_eq!(
            build_url(HOST, "acc", "oauth/token"),
            "https://api.test.pinmeto.com/oauth/token"
        );
    }

    #[test]
    fn test_insights_use_listings_v3_prefix() {
        assert_eq!(
            build_url(HOST, "acc", "insights/google/store42"),
            "https://api.test.pinmeto.com/listings/v3/acc/insights/google/store42"
        );
        assert_eq!(
            build_url(HOST, "acc", "ratings/facebook/"),
            "https://api.test.pinmeto.com/listings/v3/acc/ratings/facebook/"
        );
        assert_eq!(
            build_url(HOST, "acc", "insights/google-keywords/"),
            "https://api.test.pinmeto.com/listings/v3/acc/insights/google-keywords/"
        );
    }

    #[test]
    fn test_everything_else_uses_locations_v2_prefix() {
        assert_eq!(
            build_url(HOST, "acc", "locations"),
            "https://api.test.pinmeto.com/v2/acc/locations"
        );
        assert_eq!(
            build_url(HOST, "acc", "locations/store42"),
            "https://api.test.pinmeto.com/v2/acc/locations/store42"
        );
    }

    #[test]
    fn test_token_takes_precedence_over_listings() {
        assert_eq!(
            ResourceFamily::classify("google/token"),
            ResourceFamily::Token
        );
    }

    #[test]
    fn test_classification_is_substring_based() {
        assert_eq!(
            ResourceFamily::classify("locations/google-store"),
            ResourceFamily::Listings
        );
    }

    #[test]
    fn test_family_headers() {
        assert_eq!(ResourceFamily::Token.data_type(), DataType::FormUrlEncoded);
        assert_eq!(ResourceFamily::Locations.data_type(), DataType::Json);
        assert!(!ResourceFamily::Token.uses_bearer());
        assert!(ResourceFamily::Listings.uses_bearer());
    }
}
