use crate::ReviewApplication;
use crate::tests::application;

use uw_core::{ApplicationStatus, InsuranceType};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_life_premium_from_coverage() {
    let app = application(InsuranceType::Life, ApplicationStatus::Pending);

    // 500000 * 0.1% / 12
    assert_eq!(app.base_premium(), 42);
}

#[test]
fn test_missing_coverage_prices_at_zero() {
    let mut app = application(InsuranceType::Motor, ApplicationStatus::Pending);
    app.insurance_specific_data = json!({ "vehicleMakeModel": "Tesla Model 3" });

    assert_eq!(app.coverage_amount(), None);
    assert_eq!(app.base_premium(), 0);
}

#[test]
fn test_health_without_coverage_prices_flat() {
    let mut app = application(InsuranceType::Health, ApplicationStatus::Pending);
    app.insurance_specific_data = json!({ "planType": "Hospital" });

    assert_eq!(app.base_premium(), 400);
}

#[test]
fn test_age_counts_birthday_not_yet_reached() {
    let app = application(InsuranceType::Life, ApplicationStatus::Pending);

    assert_eq!(app.applicant_age(NaiveDate::from_ymd_opt(2025, 4, 11).unwrap()), Some(39));
    assert_eq!(app.applicant_age(NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()), Some(40));
}

#[test]
fn test_decodes_server_list_response() {
    let body = json!({
        "success": true,
        "applications": [{
            "id": "00000000-0000-0000-0000-000000000001",
            "applicantId": "00000000-0000-0000-0000-000000000002",
            "underwriterId": "00000000-0000-0000-0000-000000000003",
            "underwriterName": "Uma",
            "insuranceType": "Health",
            "status": "Requires Info",
            "personalInfo": { "fullName": "Emily Johnson" },
            "employmentInfo": {},
            "healthInfo": { "smoker": false },
            "insuranceSpecificData": { "planType": "Gold", "coverageAmount": null },
            "consents": { "healthConsent": true, "creditConsent": true, "apraConsent": true },
            "additionalDetails": null,
            "createdAt": "2025-07-01T09:30:00Z",
            "updatedAt": "2025-07-01T09:30:00Z"
        }]
    });

    let applications = ReviewApplication::from_list_response(&body).unwrap();

    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].status, ApplicationStatus::RequiresInfo);
    assert_eq!(applications[0].insurance_type, InsuranceType::Health);
    assert_eq!(applications[0].applicant_name(), "Emily Johnson");
}

#[test]
fn test_list_response_without_applications_is_an_error() {
    assert!(ReviewApplication::from_list_response(&json!({ "success": true })).is_err());
}
