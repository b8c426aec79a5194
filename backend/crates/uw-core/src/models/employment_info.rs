use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentInfo {
    pub occupation: Option<String>,
    pub industry: Option<String>,
    pub employment_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::optional_number")]
    pub annual_income: Option<f64>,
}
