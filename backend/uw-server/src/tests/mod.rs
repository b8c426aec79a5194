mod api;

use crate::{AnalyticsClient, AppState};

use uw_auth::{JwtIssuer, JwtValidator, PasswordHasher};

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-at-least-32-characters";

pub(crate) async fn create_test_state(auth_enforced: bool) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test pool");

    uw_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        jwt_issuer: Arc::new(JwtIssuer::with_hs256(TEST_SECRET.as_bytes(), 3600)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes())),
        password_hasher: PasswordHasher::new(4),
        analytics: AnalyticsClient::new("http://127.0.0.1:9/api", Duration::from_secs(1))
            .expect("Failed to build analytics client"),
        auth_enforced,
    }
}
