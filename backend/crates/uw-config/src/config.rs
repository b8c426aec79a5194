use crate::{
    AnalyticsConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for UW_CONFIG_DIR env var, else use ./.uw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply plain environment variables (PORT, DATABASE_URL, JWT_SECRET)
    /// 5. Apply UW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_plain_env();
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UW_CONFIG_DIR env var > ./.uw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.analytics.validate()?;

        Ok(())
    }

    /// SQLite connection URL. An explicit `database.url` wins over `database.path`.
    pub fn database_url(&self) -> ConfigErrorResult<String> {
        if let Some(url) = &self.database.url {
            return Ok(url.clone());
        }

        let path = Self::config_dir()?.join(&self.database.path);
        Ok(format!("sqlite://{}?mode=rwc", path.display()))
    }

    /// Absolute log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match &self.database.url {
            Some(_) => info!("  database: url (from configuration)"),
            None => info!("  database: {}", self.database.path),
        }

        info!(
            "  auth: {} (token ttl {}s, bcrypt cost {})",
            if self.auth.enabled {
                "enforced"
            } else {
                "not enforced"
            },
            self.auth.token_ttl_secs,
            self.auth.password_hash_cost
        );

        info!(
            "  analytics: {} (timeout {}s)",
            self.analytics.base_url, self.analytics.timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    /// Unprefixed deployment variables, applied before the UW_* overrides
    fn apply_plain_env(&mut self) {
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_option_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_option_string("JWT_SECRET", &mut self.auth.jwt_secret);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("UW_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UW_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_option_string("UW_DATABASE_URL", &mut self.database.url);
        Self::apply_env_string("UW_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("UW_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("UW_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("UW_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse(
            "UW_AUTH_PASSWORD_HASH_COST",
            &mut self.auth.password_hash_cost,
        );

        // Analytics
        Self::apply_env_string("UW_ANALYTICS_BASE_URL", &mut self.analytics.base_url);
        Self::apply_env_parse("UW_ANALYTICS_TIMEOUT_SECS", &mut self.analytics.timeout_secs);

        // Logging
        Self::apply_env_parse("UW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UW_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("UW_LOG_DIR", &mut self.logging.dir);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Empty values are ignored
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
