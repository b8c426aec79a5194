use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ANALYTICS_BASE_URL, DEFAULT_ANALYTICS_TIMEOUT_SECS,
    MAX_ANALYTICS_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Upstream analytics service the proxy routes forward to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_ANALYTICS_BASE_URL),
            timeout_secs: DEFAULT_ANALYTICS_TIMEOUT_SECS,
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        // The outbound HTTP client is built without TLS
        if url.starts_with("https://") {
            return Err(ConfigError::analytics(format!(
                "analytics.base_url must use http://, https is not supported: '{}'",
                self.base_url
            )));
        }

        let has_host = url
            .strip_prefix("http://")
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::analytics(format!(
                "analytics.base_url must be an http:// URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_ANALYTICS_TIMEOUT_SECS {
            return Err(ConfigError::analytics(format!(
                "analytics.timeout_secs must be 1-{}, got {}",
                MAX_ANALYTICS_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
