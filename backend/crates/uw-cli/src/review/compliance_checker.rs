//! Regulatory checks derived from the consents on an application.

use crate::ReviewApplication;

use serde::Serialize;

pub const APRA_CPS_220: &str = "APRA Prudential Standard CPS 220";
pub const INSURANCE_CONTRACTS_ACT: &str = "Insurance Contracts Act";
pub const PRIVACY_ACT_1988: &str = "Privacy Act 1988";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegulationStatus {
    Compliant,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegulationCheck {
    pub name: String,
    pub status: RegulationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceOutcome {
    Pass,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    pub status: ComplianceOutcome,
    pub regulations: Vec<RegulationCheck>,
}

impl ComplianceReport {
    /// Pass only when every regulation is compliant
    pub fn from_checks(regulations: Vec<RegulationCheck>) -> Self {
        let status = if regulations
            .iter()
            .all(|check| check.status == RegulationStatus::Compliant)
        {
            ComplianceOutcome::Pass
        } else {
            ComplianceOutcome::Warning
        };

        Self {
            status,
            regulations,
        }
    }
}

pub trait ComplianceChecker: Send + Sync {
    fn check(&self, application: &ReviewApplication) -> ComplianceReport;
}

/// Deterministic checks from the applicant's consents.
///
/// - CPS 220 needs the APRA consent.
/// - The Insurance Contracts Act has no consent of its own.
/// - The Privacy Act needs credit consent, plus health consent when health
///   details are collected for the insurance type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsentComplianceChecker;

fn status(compliant: bool) -> RegulationStatus {
    if compliant {
        RegulationStatus::Compliant
    } else {
        RegulationStatus::Warning
    }
}

impl ComplianceChecker for ConsentComplianceChecker {
    fn check(&self, application: &ReviewApplication) -> ComplianceReport {
        let consents = &application.consents;
        let health_needed = application.insurance_type.requires_health_info();

        ComplianceReport::from_checks(vec![
            RegulationCheck {
                name: APRA_CPS_220.to_string(),
                status: status(consents.apra_consent),
            },
            RegulationCheck {
                name: INSURANCE_CONTRACTS_ACT.to_string(),
                status: RegulationStatus::Compliant,
            },
            RegulationCheck {
                name: PRIVACY_ACT_1988.to_string(),
                status: status(consents.credit_consent && (consents.health_consent || !health_needed)),
            },
        ])
    }
}
