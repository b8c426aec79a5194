//! Pass-through handlers for the external analytics service.
//!
//! Upstream failures of any kind become a 500 with a fixed message per
//! operation; the cause is logged here and never sent to the caller.

use crate::{AnalyticsError, ApiError, ApiResult, AppState, SessionClaims};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use serde_json::Value;

pub const TEST_CITY_FAILURE: &str = "Failed to fetch test city";
pub const FINANCE_FAILURE: &str = "Failed to fetch finance data";
pub const RISK_ALERTS_FAILURE: &str = "Failed to fetch risk alerts";
pub const PREDICT_ML_FAILURE: &str = "Failed to run ML prediction";

#[track_caller]
fn upstream_failure(message: &'static str) -> impl FnOnce(AnalyticsError) -> ApiError {
    let location = ErrorLocation::from(Location::caller());
    move |e| {
        log::warn!("{}: {}", message, e);
        ApiError::UpstreamUnavailable {
            message: message.to_string(),
            location,
        }
    }
}

/// GET /api/debug/test_city/{city}
pub async fn test_city(
    State(state): State<AppState>,
    _claims: SessionClaims,
    Path(city): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .analytics
        .get_json(&["debug", "test_city", &city], None)
        .await
        .map(Json)
        .map_err(upstream_failure(TEST_CITY_FAILURE))
}

/// GET /api/debug/finance
pub async fn finance(
    State(state): State<AppState>,
    _claims: SessionClaims,
) -> ApiResult<Json<Value>> {
    state
        .analytics
        .get_json(&["debug", "finance"], None)
        .await
        .map(Json)
        .map_err(upstream_failure(FINANCE_FAILURE))
}

/// GET /api/risk_alerts?... with the caller's query string forwarded as-is
pub async fn risk_alerts(
    State(state): State<AppState>,
    _claims: SessionClaims,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Value>> {
    state
        .analytics
        .get_json(&["risk_alerts"], query.as_deref())
        .await
        .map(Json)
        .map_err(upstream_failure(RISK_ALERTS_FAILURE))
}

/// POST /api/predict_ml
pub async fn predict_ml(
    State(state): State<AppState>,
    _claims: SessionClaims,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = payload?;

    state
        .analytics
        .post_json(&["predict_ml"], &body)
        .await
        .map(Json)
        .map_err(upstream_failure(PREDICT_ML_FAILURE))
}
