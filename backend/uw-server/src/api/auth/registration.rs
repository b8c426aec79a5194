//! Account creation shared by `/api/auth/register` and `/api/underwriters`.

use crate::{ApiError, ApiResult, AppState, InsuranceTypesField, fields};

use uw_core::{Role, UnderwriterProfile, User};
use uw_db::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;

/// Underwriter-only registration fields as received
pub(crate) struct UnderwriterFields {
    pub insurance_types: Option<InsuranceTypesField>,
    pub years_experience: Option<u32>,
    pub region: Option<String>,
    pub certificates: Option<Vec<String>>,
    pub phone: Option<String>,
}

impl UnderwriterFields {
    #[track_caller]
    pub(crate) fn into_profile(self) -> ApiResult<UnderwriterProfile> {
        let insurance_types = fields::required(self.insurance_types, "insuranceTypes")?.parse()?;
        let years_experience = fields::required(self.years_experience, "yearsExperience")?;
        let region = fields::required_text(self.region, "region")?;

        let profile = UnderwriterProfile::new(
            insurance_types,
            years_experience,
            region,
            self.certificates.unwrap_or_default(),
            self.phone,
        )?;
        Ok(profile)
    }
}

/// Validate, hash and persist a new account.
///
/// The up-front email check gives the common case a clean error; the UNIQUE
/// constraint still catches a concurrent registration of the same address.
pub(crate) async fn register_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> ApiResult<User> {
    let mut user = User::new(name, email, String::new(), role)?;

    let repo = UserRepository::new(state.pool.clone());
    if repo.email_exists(&user.email).await? {
        return Err(ApiError::DuplicateEmail {
            email: user.email,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    user.password_hash = state.password_hasher.hash(password).await?;
    repo.create(&user).await?;

    log::info!("Registered {} {} ({})", user.role_kind(), user.id, user.email);

    Ok(user)
}
