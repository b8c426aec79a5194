use crate::{
    AppState, create_application, create_underwriter, finance, health,
    list_applicant_applications, list_underwriter_applications, list_underwriters, login,
    predict_ml, register, risk_alerts, test_city, update_application_status,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Accounts
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route(
            "/api/underwriters",
            get(list_underwriters).post(create_underwriter),
        )
        // Applications
        .route("/api/applications", post(create_application))
        .route(
            "/api/applications/applicant/{applicant_id}",
            get(list_applicant_applications),
        )
        .route(
            "/api/applications/underwriter/{underwriter_id}",
            get(list_underwriter_applications),
        )
        .route(
            "/api/applications/{application_id}/status",
            put(update_application_status),
        )
        // Analytics pass-through
        .route("/api/debug/test_city/{city}", get(test_city))
        .route("/api/debug/finance", get(finance))
        .route("/api/risk_alerts", get(risk_alerts))
        .route("/api/predict_ml", post(predict_ml))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
