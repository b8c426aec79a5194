//! Underwriter directory handlers

use crate::api::auth::registration::{UnderwriterFields, register_user};
use crate::{
    ApiError, ApiResult, AppState, CreateUnderwriterRequest, UnderwriterDto,
    UnderwriterListResponse, UnderwriterResponse, fields,
};

use uw_core::Role;
use uw_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// GET /api/underwriters
pub async fn list_underwriters(
    State(state): State<AppState>,
) -> ApiResult<Json<UnderwriterListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let underwriters = repo.find_underwriters().await?;

    Ok(Json(UnderwriterListResponse {
        success: true,
        underwriters: underwriters
            .into_iter()
            .filter_map(UnderwriterDto::from_user)
            .collect(),
    }))
}

/// POST /api/underwriters
pub async fn create_underwriter(
    State(state): State<AppState>,
    payload: Result<Json<CreateUnderwriterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UnderwriterResponse>)> {
    let Json(req) = payload?;

    let name = fields::required_text(req.name, "name")?;
    let profile = UnderwriterFields {
        insurance_types: req.insurance_types,
        years_experience: req.years_experience,
        region: req.region,
        certificates: req.certificates,
        phone: req.phone,
    }
    .into_profile()?;
    let email = fields::required_text(req.email, "email")?;
    let password = fields::required(req.password.filter(|p| !p.is_empty()), "password")?;

    let user = register_user(
        &state,
        &name,
        &email,
        &password,
        Role::Underwriter(profile),
    )
    .await?;

    let underwriter = UnderwriterDto::from_user(user).ok_or_else(|| ApiError::Internal {
        message: "Registered account is not an underwriter".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(UnderwriterResponse {
            success: true,
            underwriter,
        }),
    ))
}
