use crate::{InsuranceType, Role, RoleKind, UnderwriterProfile};

use std::str::FromStr;

#[test]
fn test_role_kind_round_trips_through_str() {
    assert_eq!(RoleKind::from_str("applicant").unwrap(), RoleKind::Applicant);
    assert_eq!(RoleKind::from_str("Underwriter").unwrap(), RoleKind::Underwriter);
    assert_eq!(RoleKind::Underwriter.as_str(), "underwriter");
    assert!(RoleKind::from_str("admin").is_err());
}

#[test]
fn test_underwriter_profile_requires_insurance_types() {
    let result = UnderwriterProfile::new(vec![], 5, "Europe".into(), vec![], None);
    assert!(result.is_err());
}

#[test]
fn test_underwriter_profile_requires_region() {
    let result = UnderwriterProfile::new(vec![InsuranceType::Life], 5, "  ".into(), vec![], None);
    assert!(result.is_err());
}

#[test]
fn test_underwriter_profile_deduplicates_types_and_drops_blank_phone() {
    let profile = UnderwriterProfile::new(
        vec![InsuranceType::Life, InsuranceType::Health, InsuranceType::Life],
        8,
        "Europe".into(),
        vec!["CII".into()],
        Some("".into()),
    )
    .unwrap();

    assert_eq!(
        profile.insurance_types,
        vec![InsuranceType::Life, InsuranceType::Health]
    );
    assert!(profile.phone.is_none());
}

#[test]
fn test_only_underwriter_role_has_profile() {
    let profile =
        UnderwriterProfile::new(vec![InsuranceType::Motor], 3, "Asia".into(), vec![], None)
            .unwrap();

    assert!(Role::Applicant.underwriter_profile().is_none());
    assert_eq!(Role::Applicant.kind(), RoleKind::Applicant);

    let role = Role::Underwriter(profile.clone());
    assert_eq!(role.kind(), RoleKind::Underwriter);
    assert_eq!(role.underwriter_profile(), Some(&profile));
}
