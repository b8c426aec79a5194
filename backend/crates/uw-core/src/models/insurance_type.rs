use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Line of business an application or underwriter covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsuranceType {
    Life,
    Health,
    Motor,
    Property,
    Travel,
    Business,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 6] = [
        Self::Life,
        Self::Health,
        Self::Motor,
        Self::Property,
        Self::Travel,
        Self::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Life => "Life",
            Self::Health => "Health",
            Self::Motor => "Motor",
            Self::Property => "Property",
            Self::Travel => "Travel",
            Self::Business => "Business",
        }
    }

    /// Whether applications of this type carry a health questionnaire
    pub fn requires_health_info(&self) -> bool {
        matches!(self, Self::Life | Self::Health)
    }

    /// Render a list the way the underwriter directory displays it: "Life, Health"
    pub fn join(types: &[InsuranceType]) -> String {
        types
            .iter()
            .map(InsuranceType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for InsuranceType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        // Form labels such as "Life Insurance" are accepted too
        let name = trimmed
            .strip_suffix(" Insurance")
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match name.as_str() {
            "life" => Ok(Self::Life),
            "health" => Ok(Self::Health),
            "motor" | "auto" => Ok(Self::Motor),
            "property" | "home" => Ok(Self::Property),
            "travel" => Ok(Self::Travel),
            "business" => Ok(Self::Business),
            _ => Err(CoreError::InvalidInsuranceType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InsuranceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InsuranceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        InsuranceType::from_str(&s).map_err(serde::de::Error::custom)
    }
}
