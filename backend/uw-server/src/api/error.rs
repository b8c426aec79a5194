//! REST API error types
//!
//! Every handler failure funnels through `ApiError`, which owns the mapping
//! to HTTP status codes and the `{"error": {code, message, field}}` body.

use uw_auth::AuthError;
use uw_core::CoreError;
use uw_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending request field, camelCase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 409
    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// 401, same for unknown email and wrong password
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 409, illegal status transition or lost compare-and-set
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 500 with a fixed per-operation message
    #[error("Upstream unavailable: {message} {location}")]
    UpstreamUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn missing_field(field: &str) -> Self {
        ApiError::MissingField {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmail { .. } | ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InvalidCredentials { .. } | ApiError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MissingField { .. } | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::UpstreamUnavailable { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            ApiError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::MissingField { .. } => "MISSING_FIELD",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::DuplicateEmail { .. } => ("Email already registered".to_string(), None),
            ApiError::InvalidCredentials { .. } => ("Invalid email or password".to_string(), None),
            ApiError::MissingField { field, .. } => {
                (format!("Missing required field: {}", field), Some(field))
            }
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::UpstreamUnavailable { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code,
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Store details are logged, never returned
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { email, .. } => ApiError::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::MissingField { field, .. } => ApiError::MissingField {
                field: field.to_string(),
                location,
            },
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location,
            },
            CoreError::InvalidInsuranceType { value, .. } => ApiError::Validation {
                message: format!("Unknown insurance type: {}", value),
                field: Some("insuranceType".to_string()),
                location,
            },
            CoreError::InvalidApplicationStatus { value, .. } => ApiError::Validation {
                message: format!("Unknown application status: {}", value),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("Unknown role: {}", value),
                field: Some("role".to_string()),
                location,
            },
            CoreError::IllegalTransition { from, to, .. } => ApiError::Conflict {
                message: format!("Cannot move application from {} to {}", from, to),
                location,
            },
            CoreError::MalformedSection {
                section, source, ..
            } => ApiError::Validation {
                message: format!("Malformed {}: {}", section, source),
                field: Some(section.to_string()),
                location,
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::PasswordHash { .. }
            | AuthError::HashTask { .. }
            | AuthError::JwtEncode { .. } => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: "Authentication service failed".to_string(),
                    location,
                }
            }
            AuthError::TokenExpired { .. } => ApiError::Unauthorized {
                message: "Session expired".to_string(),
                location,
            },
            AuthError::MissingHeader { .. } => ApiError::Unauthorized {
                message: "Missing bearer token".to_string(),
                location,
            },
            _ => ApiError::Unauthorized {
                message: "Invalid session token".to_string(),
                location,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
