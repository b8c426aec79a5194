//! Insurance application handlers

use crate::{
    ApiError, ApiResult, AppState, ApplicationListResponse, CreateApplicationRequest,
    CreateApplicationResponse, SessionClaims, UpdateStatusRequest, UpdateStatusResponse, fields,
};

use uw_core::{Application, ApplicationStatus, InsuranceType, NewApplication};
use uw_db::{ApplicationRepository, UserRepository};

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// POST /api/applications
pub async fn create_application(
    State(state): State<AppState>,
    claims: SessionClaims,
    payload: Result<Json<CreateApplicationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateApplicationResponse>)> {
    let Json(req) = payload?;

    let underwriter_ref = req.underwriter_ref();
    let applicant_id = fields::required_text(req.applicant_id, "applicantId")?;
    let underwriter_ref = fields::required_text(underwriter_ref, "underwriterId")?;
    let insurance_type = fields::required_text(req.insurance_type, "insuranceType")?;

    let applicant_id = fields::parse_id(&applicant_id, "applicantId")?;
    let underwriter_id = fields::parse_id(&underwriter_ref, "underwriterId")?;
    let insurance_type = InsuranceType::from_str(&insurance_type)?;

    claims.ensure_applicant(applicant_id)?;

    let users = UserRepository::new(state.pool.clone());
    let underwriter = users
        .find_by_id(underwriter_id)
        .await?
        .filter(|user| user.is_underwriter())
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Underwriter {} not found", underwriter_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let application = Application::new(NewApplication {
        applicant_id,
        underwriter_id,
        underwriter_name: underwriter.name,
        insurance_type,
        personal_info: req.personal_info.unwrap_or_default(),
        employment_info: req.employment_info.unwrap_or_default(),
        health_info: req.health_info,
        insurance_specific_data: req.insurance_specific_data,
        consents: req.consents.unwrap_or_default(),
        additional_details: req.additional_details,
    })?;

    let repo = ApplicationRepository::new(state.pool.clone());
    repo.create(&application).await?;

    log::info!(
        "Application {} ({}) submitted by {} to {}",
        application.id,
        application.insurance_type,
        applicant_id,
        underwriter_id
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateApplicationResponse {
            success: true,
            message: "Application submitted successfully".to_string(),
            application_id: application.id,
        }),
    ))
}

/// GET /api/applications/applicant/{applicant_id}
pub async fn list_applicant_applications(
    State(state): State<AppState>,
    claims: SessionClaims,
    Path(applicant_id): Path<String>,
) -> ApiResult<Json<ApplicationListResponse>> {
    let applicant_id = fields::parse_id(&applicant_id, "applicantId")?;
    claims.ensure_applicant(applicant_id)?;

    let repo = ApplicationRepository::new(state.pool.clone());
    let applications = repo.find_by_applicant(applicant_id).await?;

    Ok(Json(ApplicationListResponse {
        success: true,
        applications,
    }))
}

/// GET /api/applications/underwriter/{underwriter_id}
pub async fn list_underwriter_applications(
    State(state): State<AppState>,
    claims: SessionClaims,
    Path(underwriter_id): Path<String>,
) -> ApiResult<Json<ApplicationListResponse>> {
    let underwriter_id = fields::parse_id(&underwriter_id, "underwriterId")?;
    claims.ensure_underwriter(underwriter_id)?;

    let repo = ApplicationRepository::new(state.pool.clone());
    let applications = repo.find_by_underwriter(underwriter_id).await?;

    Ok(Json(ApplicationListResponse {
        success: true,
        applications,
    }))
}

/// PUT /api/applications/{application_id}/status
///
/// Writes only if the stored status is still the one the transition was
/// checked against; a lost race is reported as a conflict.
pub async fn update_application_status(
    State(state): State<AppState>,
    claims: SessionClaims,
    Path(application_id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateStatusResponse>> {
    let Json(req) = payload?;

    let application_id = fields::parse_id(&application_id, "applicationId")?;
    let next = ApplicationStatus::from_str(&fields::required_text(req.status, "status")?)?;

    let repo = ApplicationRepository::new(state.pool.clone());
    let mut application =
        repo.find_by_id(application_id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("Application {} not found", application_id),
                location: ErrorLocation::from(Location::caller()),
            })?;

    claims.ensure_underwriter(application.underwriter_id)?;

    let previous = application.transition_to(next)?;

    let updated = repo
        .update_status(application_id, previous, next, application.updated_at)
        .await?;
    if !updated {
        return Err(ApiError::Conflict {
            message: format!(
                "Application {} changed while being updated; reload and retry",
                application_id
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!(
        "Application {} moved from {} to {}",
        application_id,
        previous,
        next
    );

    Ok(Json(UpdateStatusResponse {
        success: true,
        message: "Application status updated".to_string(),
        application,
    }))
}
