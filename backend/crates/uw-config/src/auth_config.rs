use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_PASSWORD_HASH_COST,
    DEFAULT_TOKEN_TTL_SECS, MAX_PASSWORD_HASH_COST, MIN_JWT_SECRET_LEN, MIN_PASSWORD_HASH_COST,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require bearer tokens on application and analytics routes
    pub enabled: bool,
    /// HS256 signing secret. Needed even with enforcement off, since login issues tokens.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// bcrypt work factor
    pub password_hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set JWT_SECRET or UW_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LEN
            )));
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be positive"));
        }

        if !(MIN_PASSWORD_HASH_COST..=MAX_PASSWORD_HASH_COST).contains(&self.password_hash_cost) {
            return Err(ConfigError::auth(format!(
                "auth.password_hash_cost must be {}-{}, got {}",
                MIN_PASSWORD_HASH_COST, MAX_PASSWORD_HASH_COST, self.password_hash_cost
            )));
        }

        Ok(())
    }
}
