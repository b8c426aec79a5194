use uw_core::{InsuranceType, User};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public view of an underwriter account. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderwriterDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Comma-separated, e.g. "Life, Health"
    pub insurance_types: String,
    pub years_experience: u32,
    pub region: String,
    pub certificates: Vec<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UnderwriterDto {
    /// `None` for non-underwriter accounts
    pub fn from_user(user: User) -> Option<Self> {
        let profile = user.role.underwriter_profile()?.clone();

        Some(Self {
            id: user.id,
            name: user.name,
            email: user.email,
            insurance_types: InsuranceType::join(&profile.insurance_types),
            years_experience: profile.years_experience,
            region: profile.region,
            certificates: profile.certificates,
            phone: profile.phone,
            created_at: user.created_at,
        })
    }
}
