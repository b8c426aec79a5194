use crate::tests::application;
use crate::{
    ComplianceChecker, ComplianceOutcome, ConsentComplianceChecker, RegulationStatus,
};

use uw_core::{ApplicationStatus, InsuranceType};

#[test]
fn test_all_consents_pass() {
    let app = application(InsuranceType::Life, ApplicationStatus::Pending);

    let report = ConsentComplianceChecker.check(&app);

    assert_eq!(report.status, ComplianceOutcome::Pass);
    let names: Vec<&str> = report.regulations.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "APRA Prudential Standard CPS 220",
            "Insurance Contracts Act",
            "Privacy Act 1988"
        ]
    );
}

#[test]
fn test_missing_apra_consent_warns_on_cps_220() {
    let mut app = application(InsuranceType::Property, ApplicationStatus::Pending);
    app.consents.apra_consent = false;

    let report = ConsentComplianceChecker.check(&app);

    assert_eq!(report.status, ComplianceOutcome::Warning);
    assert_eq!(report.regulations[0].status, RegulationStatus::Warning);
    assert_eq!(report.regulations[2].status, RegulationStatus::Compliant);
}

#[test]
fn test_health_consent_needed_only_for_health_relevant_types() {
    let mut life = application(InsuranceType::Life, ApplicationStatus::Pending);
    life.consents.health_consent = false;
    let mut motor = application(InsuranceType::Motor, ApplicationStatus::Pending);
    motor.consents.health_consent = false;

    let life_report = ConsentComplianceChecker.check(&life);
    let motor_report = ConsentComplianceChecker.check(&motor);

    assert_eq!(life_report.regulations[2].status, RegulationStatus::Warning);
    assert_eq!(motor_report.status, ComplianceOutcome::Pass);
}

#[test]
fn test_missing_credit_consent_warns_on_privacy_act() {
    let mut app = application(InsuranceType::Travel, ApplicationStatus::Pending);
    app.consents.credit_consent = false;

    let report = ConsentComplianceChecker.check(&app);

    assert_eq!(report.regulations[2].status, RegulationStatus::Warning);
}
