#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use uw_core::{
    Application, Consents, EmploymentInfo, HealthInfo, InsuranceType, NewApplication,
    PersonalInfo, Role, UnderwriterProfile, User,
};
use uuid::Uuid;

pub fn create_test_applicant(email: &str) -> User {
    User::new("Alice Applicant", email, "hash".to_string(), Role::Applicant)
        .expect("valid applicant")
}

pub fn create_test_underwriter(name: &str, email: &str) -> User {
    let profile = UnderwriterProfile::new(
        vec![InsuranceType::Life, InsuranceType::Health],
        7,
        "Sydney".to_string(),
        vec!["ANZIIF Senior Associate".to_string()],
        Some("0400 000 000".to_string()),
    )
    .expect("valid profile");

    User::new(name, email, "hash".to_string(), Role::Underwriter(profile))
        .expect("valid underwriter")
}

/// Creates a pending life application with health details
pub fn create_test_application(applicant_id: Uuid, underwriter_id: Uuid) -> Application {
    Application::new(NewApplication {
        applicant_id,
        underwriter_id,
        underwriter_name: "Uma Underwriter".to_string(),
        insurance_type: InsuranceType::Life,
        personal_info: PersonalInfo {
            full_name: Some("Alice Applicant".to_string()),
            ..PersonalInfo::default()
        },
        employment_info: EmploymentInfo {
            occupation: Some("Engineer".to_string()),
            annual_income: Some(120_000.0),
            ..EmploymentInfo::default()
        },
        health_info: Some(HealthInfo {
            smoker: Some(false),
            family_history: vec!["Diabetes".to_string()],
            ..HealthInfo::default()
        }),
        insurance_specific_data: Some(serde_json::json!({
            "coverageAmount": 500000,
            "policyTerm": 20,
        })),
        consents: Consents {
            health_consent: true,
            credit_consent: true,
            apra_consent: true,
        },
        additional_details: None,
    })
    .expect("valid application")
}

/// Same as `create_test_application` but with both timestamps pinned
pub fn create_test_application_at(
    applicant_id: Uuid,
    underwriter_id: Uuid,
    created_at: DateTime<Utc>,
) -> Application {
    let mut application = create_test_application(applicant_id, underwriter_id);
    application.created_at = created_at;
    application.updated_at = created_at;
    application
}

pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}
