use crate::{AnalyticsClient, AnalyticsError};

use std::time::Duration;

#[test]
fn test_rejects_unparseable_base_url() {
    let result = AnalyticsClient::new("not a url", Duration::from_secs(1));

    assert!(matches!(result, Err(AnalyticsError::InvalidBaseUrl { .. })));
}

#[test]
fn test_rejects_base_url_without_path() {
    let result = AnalyticsClient::new("mailto:ops@example.com", Duration::from_secs(1));

    assert!(matches!(result, Err(AnalyticsError::InvalidBaseUrl { .. })));
}

#[test]
fn test_keeps_path_prefix() {
    let client = AnalyticsClient::new("http://localhost:5001/api", Duration::from_secs(1)).unwrap();

    assert_eq!(client.base_url().path(), "/api");
}
