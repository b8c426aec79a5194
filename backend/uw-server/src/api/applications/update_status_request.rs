use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    /// Display name or variant, e.g. "In Review" or "in_review"
    pub status: Option<String>,
}
