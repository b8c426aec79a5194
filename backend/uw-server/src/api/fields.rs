//! Request field helpers shared by the handlers.

use crate::{ApiError, ApiResult};

use uuid::Uuid;

/// Present and not blank, trimmed
#[track_caller]
pub(crate) fn required_text(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ApiError::missing_field(field)),
    }
}

#[track_caller]
pub(crate) fn required<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::missing_field(field))
}

#[track_caller]
pub(crate) fn parse_id(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|_| ApiError::validation(format!("Invalid id: {}", value), Some(field)))
}
