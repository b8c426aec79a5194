pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    analytics::{
        analytics::{finance, predict_ml, risk_alerts, test_city},
        analytics_client::AnalyticsClient,
        analytics_error::AnalyticsError,
    },
    applications::{
        application_list_response::ApplicationListResponse,
        applications::{
            create_application, list_applicant_applications, list_underwriter_applications,
            update_application_status,
        },
        create_application_request::{CreateApplicationRequest, SelectedUnderwriter},
        create_application_response::CreateApplicationResponse,
        update_status_request::UpdateStatusRequest,
        update_status_response::UpdateStatusResponse,
    },
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_claims::SessionClaims,
    message_response::MessageResponse,
    underwriters::{
        create_underwriter_request::CreateUnderwriterRequest,
        insurance_types_field::InsuranceTypesField,
        underwriter_dto::UnderwriterDto,
        underwriter_list_response::UnderwriterListResponse,
        underwriter_response::UnderwriterResponse,
        underwriters::{create_underwriter, list_underwriters},
    },
};
pub use app_state::AppState;

pub(crate) use api::fields;

pub use crate::routes::build_router;
