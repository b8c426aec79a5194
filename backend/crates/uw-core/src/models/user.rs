//! User account - applicants and underwriters share one entity.

use crate::models::stored_now;
use crate::{CoreError, CoreResult, Role, RoleKind};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Normalised to trimmed lower case; unique across all roles
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account from an already-hashed password
    #[track_caller]
    pub fn new(name: &str, email: &str, password_hash: String, role: Role) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField {
                field: "name",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let email = Self::normalize_email(email);
        if email.is_empty() {
            return Err(CoreError::MissingField {
                field: "email",
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !email.contains('@') {
            return Err(CoreError::Validation {
                message: format!("'{}' is not a valid email address", email),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = stored_now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn role_kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn is_underwriter(&self) -> bool {
        self.role_kind() == RoleKind::Underwriter
    }
}
