use crate::UnderwriterDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UnderwriterResponse {
    pub success: bool,
    pub underwriter: UnderwriterDto,
}
