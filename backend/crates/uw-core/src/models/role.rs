use crate::{CoreError, CoreResult, UnderwriterProfile};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role. Underwriter-only data exists only on the underwriter variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Applicant,
    Underwriter(UnderwriterProfile),
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Applicant => RoleKind::Applicant,
            Self::Underwriter(_) => RoleKind::Underwriter,
        }
    }

    pub fn underwriter_profile(&self) -> Option<&UnderwriterProfile> {
        match self {
            Self::Underwriter(profile) => Some(profile),
            Self::Applicant => None,
        }
    }
}

/// Role discriminant, as stored and as carried in session tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Applicant,
    Underwriter,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Underwriter => "underwriter",
        }
    }
}

impl FromStr for RoleKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applicant" => Ok(Self::Applicant),
            "underwriter" => Ok(Self::Underwriter),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
