//! Risk scoring behind a trait; the default scorer is the analytics model.

use crate::{CliClientResult, Client, ClientError, ReviewApplication};

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands used by the scoring model: above 70 is high, above 45 medium
    pub fn from_score(score: u32) -> Self {
        if score > 70 {
            Self::High
        } else if score > 45 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Score in 0..=100 with its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Decode a `{score, level}` prediction. A missing or unknown level is
    /// derived from the score.
    #[track_caller]
    pub fn from_prediction(body: &Value) -> CliClientResult<Self> {
        let score = body
            .get("score")
            .and_then(Value::as_f64)
            .ok_or_else(|| ClientError::unexpected("prediction has no numeric 'score'"))?;
        let score = score.clamp(0.0, 100.0).round() as u32;

        let level = body
            .get("level")
            .and_then(Value::as_str)
            .and_then(RiskLevel::parse)
            .unwrap_or_else(|| RiskLevel::from_score(score));

        Ok(Self { score, level })
    }
}

#[async_trait]
pub trait RiskAssessor: Send + Sync {
    async fn assess(&self, application: &ReviewApplication) -> CliClientResult<RiskAssessment>;
}

/// Scores through the server's `/api/predict_ml` pass-through
pub struct PredictMlRiskAssessor<'a> {
    client: &'a Client,
}

impl<'a> PredictMlRiskAssessor<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Model input built from the application
    pub fn features(application: &ReviewApplication) -> Value {
        let personal = &application.personal_info;
        let employment = &application.employment_info;
        let health = application.health_info.as_ref();

        json!({
            "insuranceType": application.insurance_type.as_str(),
            "age": application.applicant_age(Utc::now().date_naive()),
            "gender": personal.gender,
            "maritalStatus": personal.marital_status,
            "occupation": employment.occupation,
            "industry": employment.industry,
            "employmentType": employment.employment_type,
            "annualIncome": employment.annual_income,
            "smoker": health.and_then(|h| h.smoker),
            "alcohol": health.and_then(|h| h.alcohol),
            "preExistingConditions": health.and_then(|h| h.pre_existing_conditions),
            "coverageAmount": application.coverage_amount(),
        })
    }
}

#[async_trait]
impl<'a> RiskAssessor for PredictMlRiskAssessor<'a> {
    async fn assess(&self, application: &ReviewApplication) -> CliClientResult<RiskAssessment> {
        let prediction = self.client.predict_ml(&Self::features(application)).await?;
        RiskAssessment::from_prediction(&prediction)
    }
}
