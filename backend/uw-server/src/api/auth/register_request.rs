use crate::InsuranceTypesField;

use serde::Deserialize;

/// Every field is optional here so absence surfaces as MISSING_FIELD
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// "applicant" or "underwriter"
    pub role: Option<String>,

    // Underwriter only; ignored for applicants
    pub insurance_types: Option<InsuranceTypesField>,
    #[serde(deserialize_with = "uw_core::lenient::optional_number")]
    pub years_experience: Option<u32>,
    pub region: Option<String>,
    pub certificates: Option<Vec<String>>,
    pub phone: Option<String>,
}
