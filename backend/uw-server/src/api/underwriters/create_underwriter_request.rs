use crate::InsuranceTypesField;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUnderwriterRequest {
    pub name: Option<String>,
    pub insurance_types: Option<InsuranceTypesField>,
    #[serde(deserialize_with = "uw_core::lenient::optional_number")]
    pub years_experience: Option<u32>,
    pub region: Option<String>,
    pub certificates: Option<Vec<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}
