use crate::UnderwriterDto;

use uw_core::{InsuranceType, Role, UnderwriterProfile, User};

fn underwriter() -> User {
    let profile = UnderwriterProfile::new(
        vec![InsuranceType::Life, InsuranceType::Health],
        7,
        "Sydney".into(),
        vec!["ANZIIF Senior Associate".into()],
        Some("+61 2 5550 1234".into()),
    )
    .unwrap();

    User::new(
        "Uma Underwriter",
        "uma@example.com",
        "$2b$04$hash".into(),
        Role::Underwriter(profile),
    )
    .unwrap()
}

#[test]
fn test_applicant_has_no_underwriter_view() {
    let user = User::new("Ann", "ann@example.com", "hash".into(), Role::Applicant).unwrap();

    assert!(UnderwriterDto::from_user(user).is_none());
}

#[test]
fn test_underwriter_view_joins_insurance_types() {
    let dto = UnderwriterDto::from_user(underwriter()).unwrap();

    assert_eq!(dto.insurance_types, "Life, Health");
    assert_eq!(dto.years_experience, 7);
    assert_eq!(dto.region, "Sydney");
}

#[test]
fn test_serialized_view_omits_password_hash() {
    let dto = UnderwriterDto::from_user(underwriter()).unwrap();

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["insuranceTypes"], "Life, Health");
    assert_eq!(json["yearsExperience"], 7);
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
}
