//! Registration and login handlers

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    fields,
};
use crate::api::auth::registration::{UnderwriterFields, register_user};

use uw_core::{Role, RoleKind};
use uw_db::UserRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use error_location::ErrorLocation;

/// POST /api/auth/register
///
/// Underwriter fields are required for underwriters and dropped otherwise.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;

    let name = fields::required_text(req.name, "name")?;
    let email = fields::required_text(req.email, "email")?;
    let password = fields::required(req.password.filter(|p| !p.is_empty()), "password")?;
    let role_name = fields::required_text(req.role, "role")?;

    let role = match RoleKind::from_str(&role_name)? {
        RoleKind::Applicant => Role::Applicant,
        RoleKind::Underwriter => Role::Underwriter(
            UnderwriterFields {
                insurance_types: req.insurance_types,
                years_experience: req.years_experience,
                region: req.region,
                certificates: req.certificates,
                phone: req.phone,
            }
            .into_profile()?,
        ),
    };

    register_user(&state, &name, &email, &password, role).await?;

    Ok(Json(MessageResponse::ok("User registered successfully")))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let email = fields::required_text(req.email, "email")?;
    let password = fields::required(req.password, "password")?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !state
        .password_hasher
        .verify(&password, &user.password_hash)
        .await?
    {
        return Err(ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.jwt_issuer.issue(user.id, user.role_kind())?;
    log::info!("User {} logged in as {}", user.id, user.role_kind());

    Ok(Json(LoginResponse {
        success: true,
        token,
        role: user.role_kind(),
        name: user.name,
        user_id: user.id,
    }))
}
