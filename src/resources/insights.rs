//! Listings reports: metrics, keywords and ratings.

use std::fmt;
use std::str::FromStr;

use crate::clients::{HttpMethod, HttpResponse, Parameters};
use crate::error::PinmetoError;
use crate::resources::{optional_store_segment, ValidationError};
use crate::PinmetoClient;

/// Data source of metrics and ratings reports.
///
/// # Example
///
/// ```rust
/// use pinmeto_api::InsightSource;
///
/// let source: InsightSource = "facebook".parse().unwrap();
/// assert_eq!(source, InsightSource::Facebook);
/// assert!("bing".parse::<InsightSource>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsightSource {
    /// Google Business Profile.
    Google,
    /// Facebook pages.
    Facebook,
}

impl InsightSource {
    /// Returns the path segment of this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for InsightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsightSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(ValidationError::InvalidSource {
                source_name: other.to_string(),
            }),
        }
    }
}

fn date_range(from_date: &str, to_date: &str) -> Parameters {
    let mut parameters = Parameters::new();
    parameters.insert("from".to_string(), from_date.into());
    parameters.insert("to".to_string(), to_date.into());
    parameters
}

impl PinmetoClient {
    /// Fetches Google or Facebook metrics for all locations, or for one
    /// location when `store_id` is given.
    ///
    /// Dates are `YYYY-MM-DD`. With `fields` empty every field is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError::Validation`] without any network call if
    /// `source` is not `google` or `facebook`; otherwise see
    /// [`PinmetoClient::request`].
    pub async fn get_metrics(
        &self,
        source: &str,
        from_date: &str,
        to_date: &str,
        fields: &[&str],
        store_id: Option<&str>,
    ) -> Result<HttpResponse, PinmetoError> {
        let source: InsightSource = source.parse()?;

        let mut parameters = date_range(from_date, to_date);
        if !fields.is_empty() {
            parameters.insert("fields".to_string(), fields.join(",").into());
        }

        let call = format!("insights/{source}/{}", optional_store_segment(store_id));
        self.request(&call, parameters, HttpMethod::Get).await
    }

    /// Fetches Google search keywords for all locations, or for one location
    /// when `store_id` is given.
    ///
    /// Dates are `YYYY-MM`.
    ///
    /// # Errors
    ///
    /// See [`PinmetoClient::request`].
    pub async fn get_keywords(
        &self,
        from_date: &str,
        to_date: &str,
        store_id: Option<&str>,
    ) -> Result<HttpResponse, PinmetoError> {
        let call = format!(
            "insights/google-keywords/{}",
            optional_store_segment(store_id)
        );
        self.request(&call, date_range(from_date, to_date), HttpMethod::Get)
            .await
    }

    /// Fetches Google or Facebook ratings for all locations, or for one
    /// location when `store_id` is given.
    ///
    /// # Errors
    ///
    /// Returns [`PinmetoError::Validation`] without any network call if
    /// `source` is not `google` or `facebook`; otherwise see
    /// [`PinmetoClient::request`].
    pub async fn get_ratings(
        &self,
        source: &str,
        from_date: &str,
        to_date: &str,
        store_id: Option<&str>,
    ) -> Result<HttpResponse, PinmetoError> {
        let source: InsightSource = source.parse()?;

        let call = format!("ratings/{source}/{}", optional_store_segment(store_id));
        self.request(&call, date_range(from_date, to_date), HttpMethod::Get)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parses_supported_values() {
        assert_eq!("google".parse::<InsightSource>().unwrap(), InsightSource::Google);
        assert_eq!(
            "facebook".parse::<InsightSource>().unwrap(),
            InsightSource::Facebook
        );
    }

    #[test]
    fn test_source_rejects_other_values() {
        assert!(matches!(
            "bing".parse::<InsightSource>(),
            Err(ValidationError::InvalidSource { source_name }) if source_name == "bing"
        ));
        assert!("Google".parse::<InsightSource>().is_err());
        assert!("".parse::<InsightSource>().is_err());
    }

    #[test]
    fn test_source_display_is_path_segment() {
        assert_eq!(InsightSource::Google.to_string(), "google");
        assert_eq!(InsightSource::Facebook.to_string(), "facebook");
    }

    #[test]
    fn test_date_range_order() {
        let params = date_range("2024-01", "2024-02");
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["from", "to"]);
    }
}
