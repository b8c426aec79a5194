use crate::UnderwriterDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UnderwriterListResponse {
    pub success: bool,
    pub underwriters: Vec<UnderwriterDto>,
}
