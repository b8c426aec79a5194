use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid analytics base URL '{url}': {message} {location}")]
    InvalidBaseUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Analytics request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for AnalyticsError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        AnalyticsError::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
