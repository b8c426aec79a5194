use uw_core::Application;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
    pub application: Application,
}
