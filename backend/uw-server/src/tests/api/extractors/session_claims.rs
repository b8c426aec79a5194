use crate::tests::create_test_state;
use crate::{ApiError, SessionClaims};

use uw_core::RoleKind;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

async fn extract(auth_enforced: bool, header: Option<String>) -> Result<SessionClaims, ApiError> {
    let state = create_test_state(auth_enforced).await;
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    SessionClaims::from_request_parts(&mut parts, &state).await
}

async fn bearer_for(user_id: Uuid, role: RoleKind) -> String {
    let state = create_test_state(false).await;
    let token = state.jwt_issuer.issue(user_id, role).unwrap();
    format!("Bearer {}", token)
}

#[tokio::test]
async fn test_missing_header_yields_none_when_not_enforced() {
    let claims = extract(false, None).await.unwrap();

    assert!(claims.0.is_none());
}

#[tokio::test]
async fn test_missing_header_rejected_when_enforced() {
    let result = extract(true, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_garbage_token_ignored_when_not_enforced() {
    let claims = extract(false, Some("Bearer not-a-jwt".into())).await.unwrap();

    assert!(claims.0.is_none());
}

#[tokio::test]
async fn test_garbage_token_rejected_when_enforced() {
    let result = extract(true, Some("Bearer not-a-jwt".into())).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_valid_token_yields_claims() {
    let user_id = Uuid::new_v4();
    let header = bearer_for(user_id, RoleKind::Underwriter).await;

    let claims = extract(true, Some(header)).await.unwrap().0.unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, RoleKind::Underwriter);
}

#[tokio::test]
async fn test_anonymous_session_passes_ownership_checks() {
    let claims = SessionClaims(None);

    assert!(claims.ensure_applicant(Uuid::new_v4()).is_ok());
    assert!(claims.ensure_underwriter(Uuid::new_v4()).is_ok());
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let user_id = Uuid::new_v4();
    let header = bearer_for(user_id, RoleKind::Applicant).await;
    let claims = extract(true, Some(header)).await.unwrap();

    let result = claims.ensure_underwriter(user_id);

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_acting_for_another_subject_is_forbidden() {
    let header = bearer_for(Uuid::new_v4(), RoleKind::Applicant).await;
    let claims = extract(true, Some(header)).await.unwrap();

    let result = claims.ensure_applicant(Uuid::new_v4());

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_matching_subject_is_allowed() {
    let user_id = Uuid::new_v4();
    let header = bearer_for(user_id, RoleKind::Applicant).await;
    let claims = extract(true, Some(header)).await.unwrap();

    assert!(claims.ensure_applicant(user_id).is_ok());
}
