//! Bearer-token extractor and the ownership checks built on it

use crate::{ApiError, ApiResult, AppState};

use uw_auth::Claims;
use uw_core::RoleKind;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Claims from the `Authorization: Bearer` header, if any.
///
/// With enforcement on, a missing or invalid token rejects the request.
/// With enforcement off, a valid token is still honoured and anything else
/// yields `SessionClaims(None)`.
#[derive(Debug, Clone)]
pub struct SessionClaims(pub Option<Claims>);

impl FromRequestParts<AppState> for SessionClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            match state.jwt_validator.validate_bearer(header) {
                Ok(claims) => {
                    log::debug!("Session for user {} ({})", claims.sub, claims.role);
                    Ok(SessionClaims(Some(claims)))
                }
                Err(e) if state.auth_enforced => Err(ApiError::from(e)),
                Err(e) => {
                    if header.is_some() {
                        log::debug!("Ignoring unusable bearer token: {}", e);
                    }
                    Ok(SessionClaims(None))
                }
            }
        }
    }
}

impl SessionClaims {
    /// Only the applicant themself may act on `applicant_id`
    #[track_caller]
    pub fn ensure_applicant(&self, applicant_id: Uuid) -> ApiResult<()> {
        self.ensure_subject(RoleKind::Applicant, applicant_id)
    }

    /// Only the assigned underwriter may act on `underwriter_id`
    #[track_caller]
    pub fn ensure_underwriter(&self, underwriter_id: Uuid) -> ApiResult<()> {
        self.ensure_subject(RoleKind::Underwriter, underwriter_id)
    }

    #[track_caller]
    fn ensure_subject(&self, role: RoleKind, subject: Uuid) -> ApiResult<()> {
        let Some(claims) = &self.0 else {
            return Ok(());
        };

        if claims.role != role {
            return Err(ApiError::forbidden(format!(
                "Requires the {} role",
                role.as_str()
            )));
        }

        if claims.user_id()? != subject {
            return Err(ApiError::forbidden(format!(
                "Not permitted to act for {} {}",
                role.as_str(),
                subject
            )));
        }

        Ok(())
    }
}
