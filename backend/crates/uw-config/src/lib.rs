mod analytics_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use analytics_config::AnalyticsConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "UW_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".uw";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "underwriting.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LEN: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_PASSWORD_HASH_COST: u32 = 10;
const MIN_PASSWORD_HASH_COST: u32 = 4;
const MAX_PASSWORD_HASH_COST: u32 = 31;

const DEFAULT_ANALYTICS_BASE_URL: &str = "http://localhost:5001/api";
const DEFAULT_ANALYTICS_TIMEOUT_SECS: u64 = 10;
const MAX_ANALYTICS_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
