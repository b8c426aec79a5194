use crate::AnalyticsError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] uw_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] uw_db::DbError),

    #[error("Database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Analytics client error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
