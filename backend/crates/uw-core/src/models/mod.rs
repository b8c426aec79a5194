pub mod application;
pub mod application_status;
pub mod consents;
pub mod employment_info;
pub mod health_info;
pub mod insurance_specific_data;
pub mod insurance_type;
pub mod personal_info;
pub mod role;
pub mod underwriter_profile;
pub mod user;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the millisecond precision timestamps are stored with
pub(crate) fn stored_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
