use uw_core::{Consents, EmploymentInfo, HealthInfo, PersonalInfo};

use serde::Deserialize;
use serde_json::Value;

/// Submission payload. Sections are optional so a sparse form still submits.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub applicant_id: Option<String>,
    pub underwriter_id: Option<String>,
    /// Older clients send the picked underwriter instead of `underwriterId`
    pub selected_underwriter: Option<SelectedUnderwriter>,
    pub insurance_type: Option<String>,
    pub personal_info: Option<PersonalInfo>,
    pub employment_info: Option<EmploymentInfo>,
    pub health_info: Option<HealthInfo>,
    pub insurance_specific_data: Option<Value>,
    pub consents: Option<Consents>,
    pub additional_details: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SelectedUnderwriter {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// Ignored; the stored name is authoritative
    pub name: Option<String>,
}

impl CreateApplicationRequest {
    /// `underwriterId`, falling back to `selectedUnderwriter.id`
    pub fn underwriter_ref(&self) -> Option<String> {
        self.underwriter_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| {
                self.selected_underwriter
                    .as_ref()
                    .and_then(|selected| selected.id.clone())
            })
    }
}
