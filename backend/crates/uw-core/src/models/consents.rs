use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consents {
    pub health_consent: bool,
    pub credit_consent: bool,
    pub apra_consent: bool,
}
