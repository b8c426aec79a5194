#[allow(clippy::module_inception)]
pub mod analytics;
pub mod analytics_client;
pub mod analytics_error;
