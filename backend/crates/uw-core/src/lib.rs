pub mod error;
pub mod lenient;
pub mod models;
pub mod premium;

pub use error::{CoreError, Result as CoreResult};
pub use models::application::{Application, NewApplication};
pub use models::application_status::ApplicationStatus;
pub use models::consents::Consents;
pub use models::employment_info::EmploymentInfo;
pub use models::health_info::HealthInfo;
pub use models::insurance_specific_data::{
    BusinessCover, HealthCover, InsuranceSpecificData, LifeCover, MotorCover, PropertyCover,
    TravelCover,
};
pub use models::insurance_type::InsuranceType;
pub use models::personal_info::PersonalInfo;
pub use models::role::{Role, RoleKind};
pub use models::underwriter_profile::UnderwriterProfile;
pub use models::user::User;
pub use premium::PremiumAdjustment;
