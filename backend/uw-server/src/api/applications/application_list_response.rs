use uw_core::Application;

use serde::Serialize;

/// Newest first
#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    pub applications: Vec<Application>,
}
