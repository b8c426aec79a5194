//! Per-line-of-business application details.
//!
//! The wire and stored form is a flat camelCase object whose shape depends
//! on the application's insurance type, so the enum is untagged and parsing
//! is driven by the type rather than by the content.

use crate::{CoreError, CoreResult, InsuranceType};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeCover {
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
    /// Years
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub policy_term: Option<u32>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_relationship: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCover {
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
    pub plan_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub dependents: Option<u32>,
    pub preferred_hospital: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotorCover {
    pub vehicle_make_model: Option<String>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub year_of_manufacture: Option<i32>,
    pub registration_number: Option<String>,
    pub vehicle_usage: Option<String>,
    /// Insured vehicle value
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyCover {
    pub property_address: Option<String>,
    pub property_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub construction_year: Option<i32>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelCover {
    pub destination: Option<String>,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub travellers: Option<u32>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessCover {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub employee_count: Option<u32>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub coverage_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InsuranceSpecificData {
    Life(LifeCover),
    Health(HealthCover),
    Motor(MotorCover),
    Property(PropertyCover),
    Travel(TravelCover),
    Business(BusinessCover),
}

impl InsuranceSpecificData {
    /// Parse the open-ended payload into the structure for `insurance_type`.
    ///
    /// A missing or null payload yields the empty structure; keys that do not
    /// belong to the type are dropped.
    #[track_caller]
    pub fn from_value(insurance_type: InsuranceType, value: Option<Value>) -> CoreResult<Self> {
        let value = match value {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(v) => v,
        };

        Ok(match insurance_type {
            InsuranceType::Life => Self::Life(parse(value)?),
            InsuranceType::Health => Self::Health(parse(value)?),
            InsuranceType::Motor => Self::Motor(parse(value)?),
            InsuranceType::Property => Self::Property(parse(value)?),
            InsuranceType::Travel => Self::Travel(parse(value)?),
            InsuranceType::Business => Self::Business(parse(value)?),
        })
    }

    pub fn coverage_amount(&self) -> Option<f64> {
        match self {
            Self::Life(c) => c.coverage_amount,
            Self::Health(c) => c.coverage_amount,
            Self::Motor(c) => c.coverage_amount,
            Self::Property(c) => c.coverage_amount,
            Self::Travel(c) => c.coverage_amount,
            Self::Business(c) => c.coverage_amount,
        }
    }
}

#[track_caller]
fn parse<T: DeserializeOwned>(value: Value) -> CoreResult<T> {
    let location = ErrorLocation::from(Location::caller());
    serde_json::from_value(value).map_err(|source| CoreError::MalformedSection {
        section: "insuranceSpecificData",
        source,
        location,
    })
}
