use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationResponse {
    pub success: bool,
    pub message: String,
    pub application_id: Uuid,
}
