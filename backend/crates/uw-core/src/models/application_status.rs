//! Application workflow status.
//!
//! Statuses form a closed set with explicit legal transitions:
//!
//! | From          | To                                        |
//! |---------------|-------------------------------------------|
//! | Pending       | In Review, Requires Info, Approved, Rejected |
//! | In Review     | Requires Info, Approved, Rejected         |
//! | Requires Info | In Review, Approved, Rejected             |
//! | Approved      | Completed                                 |
//! | Rejected      | (terminal)                                |
//! | Completed     | (terminal)                                |

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    InReview,
    RequiresInfo,
    Approved,
    Rejected,
    Completed,
}

impl ApplicationStatus {
    /// Convert to the stored and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::RequiresInfo => "Requires Info",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
        }
    }

    /// Statuses reachable from this one
    pub fn allowed_transitions(&self) -> &'static [ApplicationStatus] {
        match self {
            Self::Pending => &[
                Self::InReview,
                Self::RequiresInfo,
                Self::Approved,
                Self::Rejected,
            ],
            Self::InReview => &[Self::RequiresInfo, Self::Approved, Self::Rejected],
            Self::RequiresInfo => &[Self::InReview, Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Completed],
            Self::Rejected | Self::Completed => &[],
        }
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Check a transition, returning the new status when legal
    #[track_caller]
    pub fn transition_to(&self, next: ApplicationStatus) -> CoreResult<ApplicationStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::IllegalTransition {
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    /// A decision has been made on the application
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Completed)
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "inreview" | "underreview" => Ok(Self::InReview),
            "requiresinfo" => Ok(Self::RequiresInfo),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::InvalidApplicationStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ApplicationStatus::from_str(&s).map_err(serde::de::Error::custom)
    }
}
