use crate::{CoreError, CoreResult, InsuranceType};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fields only an underwriter account carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderwriterProfile {
    pub insurance_types: Vec<InsuranceType>,
    pub years_experience: u32,
    pub region: String,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UnderwriterProfile {
    #[track_caller]
    pub fn new(
        insurance_types: Vec<InsuranceType>,
        years_experience: u32,
        region: String,
        certificates: Vec<String>,
        phone: Option<String>,
    ) -> CoreResult<Self> {
        if insurance_types.is_empty() {
            return Err(CoreError::MissingField {
                field: "insuranceTypes",
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if region.trim().is_empty() {
            return Err(CoreError::MissingField {
                field: "region",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut insurance_types = insurance_types;
        let mut seen = Vec::with_capacity(insurance_types.len());
        insurance_types.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(*t);
                true
            }
        });

        Ok(Self {
            insurance_types,
            years_experience,
            region: region.trim().to_string(),
            certificates,
            phone: phone.filter(|p| !p.trim().is_empty()),
        })
    }
}
