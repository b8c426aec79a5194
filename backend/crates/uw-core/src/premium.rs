//! Premium estimation used while reviewing an application.
//!
//! Base premiums are monthly and derived from the coverage amount with a
//! per-line annual rate; health cover is a flat monthly amount.

use crate::InsuranceType;

use serde::Serialize;

/// Flat monthly premium for health cover
pub const HEALTH_FLAT_MONTHLY: f64 = 400.0;

pub const MIN_ADJUSTMENT_PERCENT: i32 = -30;
pub const MAX_ADJUSTMENT_PERCENT: i32 = 50;

/// Annual premium rate as a fraction of the coverage amount
fn annual_rate(insurance_type: InsuranceType) -> f64 {
    match insurance_type {
        InsuranceType::Life => 0.001,
        InsuranceType::Property => 0.0015,
        InsuranceType::Motor => 0.02,
        InsuranceType::Business => 0.002,
        InsuranceType::Health | InsuranceType::Travel => 0.001,
    }
}

/// Monthly base premium, rounded to whole currency units.
///
/// Health is flat regardless of coverage. For the other lines, no coverage
/// amount means nothing to price and the result is 0.
pub fn base_monthly_premium(insurance_type: InsuranceType, coverage_amount: Option<f64>) -> i64 {
    if insurance_type == InsuranceType::Health {
        return HEALTH_FLAT_MONTHLY.round() as i64;
    }

    let Some(coverage) = coverage_amount.filter(|c| *c > 0.0) else {
        return 0;
    };

    (coverage * annual_rate(insurance_type) / 12.0).round() as i64
}

/// Risk-based premium adjustment in whole percent, clamped to -30..=50
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PremiumAdjustment(i32);

impl PremiumAdjustment {
    pub fn new(percent: i32) -> Self {
        Self(percent.clamp(MIN_ADJUSTMENT_PERCENT, MAX_ADJUSTMENT_PERCENT))
    }

    pub fn percent(&self) -> i32 {
        self.0
    }

    /// Apply to a base premium, rounding to whole currency units
    pub fn apply(&self, base_premium: i64) -> i64 {
        (base_premium as f64 * (1.0 + f64::from(self.0) / 100.0)).round() as i64
    }
}

impl std::fmt::Display for PremiumAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}%", self.0)
        } else {
            write!(f, "{}%", self.0)
        }
    }
}
