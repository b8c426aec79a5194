//! State held while an underwriter reviews one application.

use crate::{
    CliClientResult, ClientError, ComplianceChecker, ComplianceReport, ReviewApplication,
    RiskAssessment, RiskAssessor,
};

use uw_core::{ApplicationStatus, InsuranceType, PremiumAdjustment};

use serde::Serialize;
use uuid::Uuid;

/// The selected application plus its transient review results.
///
/// Selecting an application discards the risk assessment, compliance report
/// and premium adjustment of the previous one.
#[derive(Debug, Default)]
pub struct ReviewSession {
    application: Option<ReviewApplication>,
    risk: Option<RiskAssessment>,
    compliance: Option<ComplianceReport>,
    premium_adjustment: PremiumAdjustment,
}

/// Snapshot printed once both checks have run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub application_id: Uuid,
    pub applicant: String,
    pub insurance_type: InsuranceType,
    pub status: ApplicationStatus,
    pub coverage_amount: Option<f64>,
    pub risk: RiskAssessment,
    pub compliance: ComplianceReport,
    pub base_premium: i64,
    pub premium_adjustment: PremiumAdjustment,
    pub adjusted_premium: i64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, application: ReviewApplication) {
        *self = Self {
            application: Some(application),
            ..Self::default()
        };
    }

    pub fn application(&self) -> Option<&ReviewApplication> {
        self.application.as_ref()
    }

    pub fn risk(&self) -> Option<&RiskAssessment> {
        self.risk.as_ref()
    }

    pub fn compliance(&self) -> Option<&ComplianceReport> {
        self.compliance.as_ref()
    }

    pub fn premium_adjustment(&self) -> PremiumAdjustment {
        self.premium_adjustment
    }

    #[track_caller]
    fn selected(&self) -> CliClientResult<&ReviewApplication> {
        self.application
            .as_ref()
            .ok_or_else(|| ClientError::review("No application selected"))
    }

    pub async fn run_risk_assessment(
        &mut self,
        assessor: &dyn RiskAssessor,
    ) -> CliClientResult<RiskAssessment> {
        let assessment = assessor.assess(self.selected()?).await?;
        self.risk = Some(assessment);
        Ok(assessment)
    }

    pub fn run_compliance_check(
        &mut self,
        checker: &dyn ComplianceChecker,
    ) -> CliClientResult<&ComplianceReport> {
        let report = checker.check(self.selected()?);
        Ok(self.compliance.insert(report))
    }

    /// Set the risk-based adjustment; out-of-range values are clamped
    pub fn adjust_premium(&mut self, percent: i32) -> PremiumAdjustment {
        self.premium_adjustment = PremiumAdjustment::new(percent);
        self.premium_adjustment
    }

    pub fn base_premium(&self) -> Option<i64> {
        self.application.as_ref().map(ReviewApplication::base_premium)
    }

    pub fn adjusted_premium(&self) -> Option<i64> {
        self.base_premium()
            .map(|base| self.premium_adjustment.apply(base))
    }

    /// Both the risk assessment and the compliance check have run
    pub fn report_ready(&self) -> bool {
        self.application.is_some() && self.risk.is_some() && self.compliance.is_some()
    }

    pub fn report(&self) -> Option<ReviewReport> {
        let application = self.application.as_ref()?;
        let risk = self.risk?;
        let compliance = self.compliance.clone()?;
        let base_premium = application.base_premium();

        Some(ReviewReport {
            application_id: application.id,
            applicant: application.applicant_name().to_string(),
            insurance_type: application.insurance_type,
            status: application.status,
            coverage_amount: application.coverage_amount(),
            risk,
            compliance,
            base_premium,
            premium_adjustment: self.premium_adjustment,
            adjusted_premium: self.premium_adjustment.apply(base_premium),
        })
    }

    /// Check a decision before sending it.
    ///
    /// The transition must be legal from the selected application's status,
    /// and approval needs a ready report.
    #[track_caller]
    pub fn ensure_decidable(&self, next: ApplicationStatus) -> CliClientResult<()> {
        let application = self.selected()?;

        application
            .status
            .transition_to(next)
            .map_err(|e| ClientError::review(e.to_string()))?;

        if next == ApplicationStatus::Approved && !self.report_ready() {
            return Err(ClientError::review(
                "Complete risk assessment and compliance check first",
            ));
        }

        Ok(())
    }
}
