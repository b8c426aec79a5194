use crate::{ApiError, fields};

#[test]
fn test_required_text_trims_value() {
    let value = fields::required_text(Some("  Jane  ".into()), "name").unwrap();

    assert_eq!(value, "Jane");
}

#[test]
fn test_required_text_rejects_blank() {
    let result = fields::required_text(Some("   ".into()), "name");

    match result {
        Err(ApiError::MissingField { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_required_rejects_absent() {
    let result = fields::required::<u32>(None, "yearsExperience");

    assert!(matches!(result, Err(ApiError::MissingField { .. })));
}

#[test]
fn test_parse_id_reports_field_on_bad_uuid() {
    let result = fields::parse_id("not-a-uuid", "applicantId");

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("applicantId"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
