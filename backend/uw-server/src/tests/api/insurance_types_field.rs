use crate::InsuranceTypesField;

use uw_core::InsuranceType;

#[test]
fn test_list_form_parses_each_entry() {
    let field: InsuranceTypesField = serde_json::from_str(r#"["Life", "Motor"]"#).unwrap();

    let types = field.parse().unwrap();

    assert_eq!(types, vec![InsuranceType::Life, InsuranceType::Motor]);
}

#[test]
fn test_csv_form_skips_blank_entries() {
    let field: InsuranceTypesField = serde_json::from_str(r#""Life, Health,, ""#).unwrap();

    let types = field.parse().unwrap();

    assert_eq!(types, vec![InsuranceType::Life, InsuranceType::Health]);
}

#[test]
fn test_unknown_type_is_an_error() {
    let field = InsuranceTypesField::Csv("Life, Pet".into());

    assert!(field.parse().is_err());
}
