use crate::{CliClientResult, ClientError};

use uw_core::premium::base_monthly_premium;
use uw_core::{
    ApplicationStatus, Consents, EmploymentInfo, HealthInfo, InsuranceSpecificData,
    InsuranceType, PersonalInfo,
};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// An application as the server returns it in list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewApplication {
    pub id: Uuid,
    pub applicant_id: Uuid,
    pub underwriter_id: Uuid,
    pub underwriter_name: String,
    pub insurance_type: InsuranceType,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub employment_info: EmploymentInfo,
    #[serde(default)]
    pub health_info: Option<HealthInfo>,
    #[serde(default)]
    pub insurance_specific_data: Value,
    #[serde(default)]
    pub consents: Consents,
    #[serde(default)]
    pub additional_details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReviewApplication {
    /// Decode the `applications` array of a list response
    #[track_caller]
    pub fn from_list_response(body: &Value) -> CliClientResult<Vec<Self>> {
        let applications = body
            .get("applications")
            .cloned()
            .ok_or_else(|| ClientError::unexpected("response has no 'applications'"))?;
        Ok(serde_json::from_value(applications)?)
    }

    /// Coverage amount from the type-specific details, if the applicant gave one
    pub fn coverage_amount(&self) -> Option<f64> {
        InsuranceSpecificData::from_value(
            self.insurance_type,
            Some(self.insurance_specific_data.clone()),
        )
        .ok()?
        .coverage_amount()
    }

    /// Monthly base premium before any risk adjustment
    pub fn base_premium(&self) -> i64 {
        base_monthly_premium(self.insurance_type, self.coverage_amount())
    }

    /// Applicant's age in whole years on `today`
    pub fn applicant_age(&self, today: NaiveDate) -> Option<u32> {
        let born = self.personal_info.date_of_birth?;
        let mut age = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }

    /// Display name for queue listings
    pub fn applicant_name(&self) -> &str {
        self.personal_info
            .full_name
            .as_deref()
            .unwrap_or("(unnamed applicant)")
    }
}
