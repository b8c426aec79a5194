use crate::{
    Application, ApplicationStatus, Consents, CoreError, EmploymentInfo, HealthInfo,
    InsuranceSpecificData, InsuranceType, NewApplication, PersonalInfo,
};

use serde_json::json;
use uuid::Uuid;

fn submission(insurance_type: InsuranceType, specific: serde_json::Value) -> NewApplication {
    NewApplication {
        applicant_id: Uuid::new_v4(),
        underwriter_id: Uuid::new_v4(),
        underwriter_name: "Jane Doe".to_string(),
        insurance_type,
        personal_info: PersonalInfo {
            full_name: Some("Robert Chen".into()),
            ..Default::default()
        },
        employment_info: EmploymentInfo::default(),
        health_info: Some(HealthInfo {
            smoker: Some(false),
            ..Default::default()
        }),
        insurance_specific_data: Some(specific),
        consents: Consents::default(),
        additional_details: Some("   ".into()),
    }
}

#[test]
fn test_new_application_starts_pending() {
    let app = Application::new(submission(InsuranceType::Life, json!({}))).unwrap();

    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.created_at, app.updated_at);
    assert!(app.additional_details.is_none());
}

#[test]
fn test_motor_application_drops_health_info_and_keeps_vehicle_fields() {
    let app = Application::new(submission(
        InsuranceType::Motor,
        json!({
            "vehicleMakeModel": "Tesla Model 3",
            "yearOfManufacture": 2022,
            "registrationNumber": "ABC-123",
            "somethingElse": true
        }),
    ))
    .unwrap();

    assert!(app.health_info.is_none());

    let json = serde_json::to_value(&app).unwrap();
    assert!(json.get("healthInfo").is_none());

    let specific = &json["insuranceSpecificData"];
    assert_eq!(specific["vehicleMakeModel"], "Tesla Model 3");
    assert_eq!(specific["yearOfManufacture"], 2022);
    assert_eq!(specific["registrationNumber"], "ABC-123");
    assert!(specific.get("somethingElse").is_none());
}

#[test]
fn test_life_application_keeps_health_info() {
    let app = Application::new(submission(
        InsuranceType::Life,
        json!({ "coverageAmount": 500000.0, "policyTerm": 20 }),
    ))
    .unwrap();

    assert_eq!(app.health_info.as_ref().and_then(|h| h.smoker), Some(false));
    assert_eq!(app.insurance_specific_data.coverage_amount(), Some(500000.0));
    assert!(matches!(
        app.insurance_specific_data,
        InsuranceSpecificData::Life(_)
    ));
}

#[test]
fn test_missing_specific_data_yields_empty_structure() {
    let mut sub = submission(InsuranceType::Travel, json!(null));
    sub.insurance_specific_data = None;

    let app = Application::new(sub).unwrap();

    assert!(matches!(
        app.insurance_specific_data,
        InsuranceSpecificData::Travel(_)
    ));
    let json = serde_json::to_value(&app.insurance_specific_data).unwrap();
    assert!(json.get("destination").is_some());
}

#[test]
fn test_malformed_specific_data_is_rejected() {
    let result = Application::new(submission(
        InsuranceType::Motor,
        json!({ "yearOfManufacture": "last year" }),
    ));

    assert!(matches!(result, Err(CoreError::MalformedSection { .. })));
}

#[test]
fn test_transition_updates_status_and_returns_previous() {
    let mut app = Application::new(submission(InsuranceType::Health, json!({}))).unwrap();

    let previous = app.transition_to(ApplicationStatus::InReview).unwrap();

    assert_eq!(previous, ApplicationStatus::Pending);
    assert_eq!(app.status, ApplicationStatus::InReview);
    assert!(app.updated_at >= app.created_at);
}

#[test]
fn test_illegal_transition_leaves_application_untouched() {
    let mut app = Application::new(submission(InsuranceType::Health, json!({}))).unwrap();
    app.transition_to(ApplicationStatus::Rejected).unwrap();
    let before = app.clone();

    let result = app.transition_to(ApplicationStatus::Approved);

    assert!(matches!(result, Err(CoreError::IllegalTransition { .. })));
    assert_eq!(app, before);
}

#[test]
fn test_timestamps_have_millisecond_precision() {
    let mut app = Application::new(submission(InsuranceType::Life, json!({}))).unwrap();
    assert_eq!(app.created_at.timestamp_subsec_nanos() % 1_000_000, 0);

    app.transition_to(ApplicationStatus::InReview).unwrap();
    assert_eq!(app.updated_at.timestamp_subsec_nanos() % 1_000_000, 0);
}
