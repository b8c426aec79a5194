use crate::tests::application;
use crate::{PredictMlRiskAssessor, RiskAssessment, RiskLevel};

use uw_core::{ApplicationStatus, HealthInfo, InsuranceType};

use serde_json::json;

#[test]
fn test_score_bands() {
    assert_eq!(RiskLevel::from_score(45), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(46), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(70), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(71), RiskLevel::High);
}

#[test]
fn test_prediction_with_level() {
    let assessment = RiskAssessment::from_prediction(&json!({ "score": 52, "level": "Medium" }))
        .unwrap();

    assert_eq!(assessment.score, 52);
    assert_eq!(assessment.level, RiskLevel::Medium);
}

#[test]
fn test_prediction_without_level_derives_it() {
    let assessment = RiskAssessment::from_prediction(&json!({ "score": 88.4 })).unwrap();

    assert_eq!(assessment.score, 88);
    assert_eq!(assessment.level, RiskLevel::High);
}

#[test]
fn test_prediction_score_is_clamped() {
    let assessment = RiskAssessment::from_prediction(&json!({ "score": 140 })).unwrap();

    assert_eq!(assessment.score, 100);
}

#[test]
fn test_prediction_without_score_is_an_error() {
    assert!(RiskAssessment::from_prediction(&json!({ "level": "Low" })).is_err());
}

#[test]
fn test_features_carry_type_coverage_and_health() {
    let mut app = application(InsuranceType::Life, ApplicationStatus::Pending);
    app.health_info = Some(HealthInfo {
        smoker: Some(true),
        ..HealthInfo::default()
    });

    let features = PredictMlRiskAssessor::features(&app);

    assert_eq!(features["insuranceType"], "Life");
    assert_eq!(features["coverageAmount"], 500000.0);
    assert_eq!(features["smoker"], true);
    assert!(features["age"].is_u64());
}
