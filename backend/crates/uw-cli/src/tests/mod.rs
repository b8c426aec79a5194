mod client;
mod review;

use crate::ReviewApplication;

use uw_core::{ApplicationStatus, Consents, InsuranceType, PersonalInfo};

use chrono::{NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;

pub(crate) fn all_consents() -> Consents {
    Consents {
        health_consent: true,
        credit_consent: true,
        apra_consent: true,
    }
}

pub(crate) fn application(
    insurance_type: InsuranceType,
    status: ApplicationStatus,
) -> ReviewApplication {
    ReviewApplication {
        id: Uuid::new_v4(),
        applicant_id: Uuid::new_v4(),
        underwriter_id: Uuid::new_v4(),
        underwriter_name: "Uma Underwriter".to_string(),
        insurance_type,
        status,
        personal_info: PersonalInfo {
            full_name: Some("Robert Chen".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12),
            ..PersonalInfo::default()
        },
        employment_info: Default::default(),
        health_info: None,
        insurance_specific_data: json!({ "coverageAmount": 500000.0, "policyTerm": 20 }),
        consents: all_consents(),
        additional_details: None,
        created_at: Utc::now(),
    }
}
