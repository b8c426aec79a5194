use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid insurance type: {value} {location}")]
    InvalidInsuranceType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid application status: {value} {location}")]
    InvalidApplicationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Illegal status transition from '{from}' to '{to}' {location}")]
    IllegalTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },

    #[error("Malformed {section}: {source} {location}")]
    MalformedSection {
        section: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
