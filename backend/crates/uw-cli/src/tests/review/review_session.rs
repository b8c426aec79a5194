use crate::tests::application;
use crate::{
    CliClientResult, ConsentComplianceChecker, ReviewApplication, ReviewSession, RiskAssessment,
    RiskAssessor, RiskLevel,
};

use uw_core::{ApplicationStatus, InsuranceType};

use async_trait::async_trait;

struct FixedRisk(u32);

#[async_trait]
impl RiskAssessor for FixedRisk {
    async fn assess(&self, _application: &ReviewApplication) -> CliClientResult<RiskAssessment> {
        Ok(RiskAssessment {
            score: self.0,
            level: RiskLevel::from_score(self.0),
        })
    }
}

async fn reviewed(status: ApplicationStatus) -> ReviewSession {
    let mut session = ReviewSession::new();
    session.select(application(InsuranceType::Life, status));
    session.run_risk_assessment(&FixedRisk(60)).await.unwrap();
    session
        .run_compliance_check(&ConsentComplianceChecker)
        .unwrap();
    session
}

#[tokio::test]
async fn test_selecting_new_application_resets_transient_state() {
    let mut session = reviewed(ApplicationStatus::Pending).await;
    session.adjust_premium(20);

    session.select(application(InsuranceType::Motor, ApplicationStatus::Pending));

    assert!(session.risk().is_none());
    assert!(session.compliance().is_none());
    assert_eq!(session.premium_adjustment().percent(), 0);
    assert!(!session.report_ready());
}

#[tokio::test]
async fn test_report_needs_both_checks() {
    let mut session = ReviewSession::new();
    session.select(application(InsuranceType::Life, ApplicationStatus::Pending));

    session.run_risk_assessment(&FixedRisk(30)).await.unwrap();
    assert!(!session.report_ready());
    assert!(session.report().is_none());

    session
        .run_compliance_check(&ConsentComplianceChecker)
        .unwrap();
    assert!(session.report_ready());
    assert!(session.report().is_some());
}

#[tokio::test]
async fn test_checks_without_selection_fail() {
    let mut session = ReviewSession::new();

    assert!(session.run_risk_assessment(&FixedRisk(30)).await.is_err());
    assert!(session
        .run_compliance_check(&ConsentComplianceChecker)
        .is_err());
}

#[tokio::test]
async fn test_premium_adjustment_is_clamped_and_applied() {
    let mut session = reviewed(ApplicationStatus::Pending).await;

    let adjustment = session.adjust_premium(80);

    assert_eq!(adjustment.percent(), 50);
    assert_eq!(session.base_premium(), Some(42));
    assert_eq!(session.adjusted_premium(), Some(63));

    let report = session.report().unwrap();
    assert_eq!(report.adjusted_premium, 63);
    assert_eq!(report.risk.level, RiskLevel::Medium);
}

#[tokio::test]
async fn test_approval_requires_ready_report() {
    let mut session = ReviewSession::new();
    session.select(application(InsuranceType::Life, ApplicationStatus::Pending));

    assert!(session.ensure_decidable(ApplicationStatus::Approved).is_err());
    assert!(session.ensure_decidable(ApplicationStatus::Rejected).is_ok());
}

#[tokio::test]
async fn test_illegal_transition_is_refused() {
    let session = reviewed(ApplicationStatus::Rejected).await;

    assert!(session.ensure_decidable(ApplicationStatus::Approved).is_err());
}

#[tokio::test]
async fn test_reviewed_application_can_be_approved() {
    let session = reviewed(ApplicationStatus::InReview).await;

    assert!(session.ensure_decidable(ApplicationStatus::Approved).is_ok());
}
