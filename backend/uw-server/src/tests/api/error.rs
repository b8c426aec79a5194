use crate::ApiError;

use uw_core::{ApplicationStatus, CoreError, InsuranceType};
use uw_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Application not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Application not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_missing_field_names_the_field() {
    let (status, json) = body_json(ApiError::missing_field("email")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_FIELD");
    assert_eq!(json["error"]["field"], "email");
    assert_eq!(json["error"]["message"], "Missing required field: email");
}

#[tokio::test]
async fn test_duplicate_email_does_not_echo_address() {
    let error = ApiError::DuplicateEmail {
        email: "jane@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn test_upstream_unavailable_returns_500() {
    let error = ApiError::UpstreamUnavailable {
        message: "Failed to fetch finance data".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(json["error"]["message"], "Failed to fetch finance data");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("Requires the underwriter role")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[test]
fn test_illegal_transition_converts_to_conflict() {
    let core_err = ApplicationStatus::Approved
        .transition_to(ApplicationStatus::Rejected)
        .unwrap_err();
    let api_err: ApiError = core_err.into();

    assert_eq!(api_err.status_code(), StatusCode::CONFLICT);
    assert_eq!(api_err.code(), "CONFLICT");
}

#[test]
fn test_unknown_insurance_type_converts_to_validation_on_field() {
    let core_err: CoreError = InsuranceType::from_str("Pet").unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Pet"));
            assert_eq!(field.as_deref(), Some("insuranceType"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_database_failure_is_masked_as_internal() {
    let db_err = DbError::CorruptRow {
        table: "users",
        message: "bad role".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_email_db_error_converts_to_409() {
    let db_err = DbError::DuplicateEmail {
        email: "jane@example.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status_code(), StatusCode::CONFLICT);
    assert_eq!(api_err.code(), "DUPLICATE_EMAIL");
}
