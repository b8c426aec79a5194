use crate::InsuranceType;

use std::str::FromStr;

#[test]
fn test_insurance_type_from_str_is_case_insensitive() {
    assert_eq!(InsuranceType::from_str("life").unwrap(), InsuranceType::Life);
    assert_eq!(InsuranceType::from_str("HEALTH").unwrap(), InsuranceType::Health);
    assert_eq!(InsuranceType::from_str(" Motor ").unwrap(), InsuranceType::Motor);
}

#[test]
fn test_insurance_type_accepts_form_labels_and_aliases() {
    assert_eq!(InsuranceType::from_str("Auto").unwrap(), InsuranceType::Motor);
    assert_eq!(
        InsuranceType::from_str("Auto Insurance").unwrap(),
        InsuranceType::Motor
    );
    assert_eq!(
        InsuranceType::from_str("Property Insurance").unwrap(),
        InsuranceType::Property
    );
    assert!(InsuranceType::from_str("Pet").is_err());
}

#[test]
fn test_only_life_and_health_require_health_info() {
    let health_relevant: Vec<_> = InsuranceType::ALL
        .iter()
        .filter(|t| t.requires_health_info())
        .collect();

    assert_eq!(health_relevant, vec![&InsuranceType::Life, &InsuranceType::Health]);
}

#[test]
fn test_join_renders_comma_separated() {
    assert_eq!(
        InsuranceType::join(&[InsuranceType::Life, InsuranceType::Health]),
        "Life, Health"
    );
    assert_eq!(InsuranceType::join(&[]), "");
}
