use uw_core::{CoreResult, InsuranceType};

use std::str::FromStr;

use serde::Deserialize;

/// `insuranceTypes` as sent by clients: a JSON list or a comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InsuranceTypesField {
    List(Vec<String>),
    Csv(String),
}

impl InsuranceTypesField {
    /// Blank entries are skipped; an unknown name is an error
    pub fn parse(&self) -> CoreResult<Vec<InsuranceType>> {
        let names: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Csv(csv) => csv.split(',').collect(),
        };

        names
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(InsuranceType::from_str)
            .collect()
    }
}
