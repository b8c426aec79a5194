use uw_core::RoleKind;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub role: RoleKind,
    pub name: String,
    pub user_id: Uuid,
}
