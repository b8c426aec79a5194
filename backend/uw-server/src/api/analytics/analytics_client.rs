//! Outbound client for the external analytics service.

use crate::api::analytics::analytics_error::{AnalyticsError, Result as AnalyticsResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// Cheap to clone; clones share one connection pool
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base_url: Url,
    client: ReqwestClient,
}

impl AnalyticsClient {
    /// # Arguments
    /// * `base_url` - Service root including any path prefix, e.g. "http://localhost:5001/api"
    /// * `timeout` - Whole-request timeout
    #[track_caller]
    pub fn new(base_url: &str, timeout: Duration) -> AnalyticsResult<Self> {
        let invalid = |message: String| AnalyticsError::InvalidBaseUrl {
            url: base_url.to_string(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let base_url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `{base}/{segments...}?{query}` and decode the JSON body
    pub async fn get_json(&self, segments: &[&str], query: Option<&str>) -> AnalyticsResult<Value> {
        let mut url = self.endpoint(segments)?;
        url.set_query(query.filter(|q| !q.is_empty()));

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// POST a JSON body to `{base}/{segments...}` and decode the JSON reply
    pub async fn post_json(&self, segments: &[&str], body: &Value) -> AnalyticsResult<Value> {
        let url = self.endpoint(segments)?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Segments are percent-encoded, so a path parameter cannot escape its slot
    #[track_caller]
    fn endpoint(&self, segments: &[&str]) -> AnalyticsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AnalyticsError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: "URL cannot carry a path".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
