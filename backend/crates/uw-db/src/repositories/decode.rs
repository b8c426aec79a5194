//! Shared helpers for turning stored columns back into domain values.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(table: &'static str, column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::CorruptRow {
        table,
        message: format!("Invalid UUID in {}.{}: {}", table, column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp(
    table: &'static str,
    column: &str,
    millis: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::CorruptRow {
        table,
        message: format!("Invalid timestamp in {}.{}", table, column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn json<T: DeserializeOwned>(
    table: &'static str,
    column: &str,
    raw: &str,
) -> DbErrorResult<T> {
    serde_json::from_str(raw).map_err(|e| DbError::CorruptRow {
        table,
        message: format!("Invalid JSON in {}.{}: {}", table, column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn to_json<T: Serialize>(column: &'static str, value: &T) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|source| DbError::Encode {
        column,
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Unique-constraint failures surface as a dedicated error at the call site
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}
