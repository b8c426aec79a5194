use serde::{Deserialize, Serialize};

/// Health questionnaire, only kept for health-relevant insurance types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthInfo {
    pub smoker: Option<bool>,
    pub alcohol: Option<bool>,
    /// Centimetres
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub height: Option<f64>,
    /// Kilograms
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub weight: Option<f64>,
    pub pre_existing_conditions: Option<bool>,
    pub medical_conditions: Option<String>,
    pub family_history: Vec<String>,
}
