use crate::AnalyticsClient;
use crate::error::Result as ServerErrorResult;

use uw_auth::{JwtIssuer, JwtValidator, PasswordHasher};
use uw_config::{Config, ConfigError};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub password_hasher: PasswordHasher,
    pub analytics: AnalyticsClient,
    /// Reject application and analytics requests without a valid bearer token
    pub auth_enforced: bool,
}

impl AppState {
    /// Build state from validated configuration
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        let analytics = AnalyticsClient::new(
            &config.analytics.base_url,
            Duration::from_secs(config.analytics.timeout_secs),
        )?;

        Ok(Self {
            pool,
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                secret.as_bytes(),
                config.auth.token_ttl_secs,
            )),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            password_hasher: PasswordHasher::new(config.auth.password_hash_cost),
            analytics,
            auth_enforced: config.auth.enabled,
        })
    }
}
