//! Insurance application - the unit of mutation in the workflow.

use crate::models::stored_now;
use crate::{
    ApplicationStatus, Consents, CoreResult, EmploymentInfo, HealthInfo, InsuranceSpecificData,
    InsuranceType, PersonalInfo,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Submission payload after required-field checks
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub applicant_id: Uuid,
    pub underwriter_id: Uuid,
    pub underwriter_name: String,
    pub insurance_type: InsuranceType,
    pub personal_info: PersonalInfo,
    pub employment_info: EmploymentInfo,
    pub health_info: Option<HealthInfo>,
    pub insurance_specific_data: Option<Value>,
    pub consents: Consents,
    pub additional_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    /// Weak reference to the applicant's user id
    pub applicant_id: Uuid,
    /// Weak reference to the underwriter's user id
    pub underwriter_id: Uuid,
    /// Copy of the underwriter's name at submission time
    pub underwriter_name: String,
    pub insurance_type: InsuranceType,
    pub status: ApplicationStatus,
    pub personal_info: PersonalInfo,
    pub employment_info: EmploymentInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_info: Option<HealthInfo>,
    pub insurance_specific_data: InsuranceSpecificData,
    pub consents: Consents,
    pub additional_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Build a pending application from a submission.
    ///
    /// Health details are dropped unless the insurance type needs them.
    #[track_caller]
    pub fn new(submission: NewApplication) -> CoreResult<Self> {
        let insurance_specific_data = InsuranceSpecificData::from_value(
            submission.insurance_type,
            submission.insurance_specific_data,
        )?;

        let health_info = if submission.insurance_type.requires_health_info() {
            submission.health_info
        } else {
            None
        };

        let now = stored_now();
        Ok(Self {
            id: Uuid::new_v4(),
            applicant_id: submission.applicant_id,
            underwriter_id: submission.underwriter_id,
            underwriter_name: submission.underwriter_name,
            insurance_type: submission.insurance_type,
            status: ApplicationStatus::Pending,
            personal_info: submission.personal_info,
            employment_info: submission.employment_info,
            health_info,
            insurance_specific_data,
            consents: submission.consents,
            additional_details: submission
                .additional_details
                .filter(|d| !d.trim().is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Move to `next`, stamping `updated_at`. Returns the previous status.
    #[track_caller]
    pub fn transition_to(&mut self, next: ApplicationStatus) -> CoreResult<ApplicationStatus> {
        let previous = self.status;
        self.status = previous.transition_to(next)?;
        self.updated_at = stored_now();
        Ok(previous)
    }
}
