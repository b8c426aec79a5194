use crate::{Client, Session};

use uw_core::RoleKind;

use uuid::Uuid;

fn session() -> Session {
    Session {
        token: "token-123".to_string(),
        user_id: Uuid::new_v4(),
        role: RoleKind::Applicant,
        name: "Ann".to_string(),
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/", None);
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000", None);
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_session_stored() {
    let session = session();
    let client = Client::new("http://localhost:5000", Some(session.clone()));
    assert_eq!(client.session, Some(session));
}

#[test]
fn test_session_none() {
    let client = Client::new("http://localhost:5000", None);
    assert!(client.session.is_none());
}

#[test]
fn test_parse_key_value_splits_on_first_equals() {
    let parsed = crate::analytics_commands::parse_key_value("note=a=b").unwrap();
    assert_eq!(parsed, ("note".to_string(), "a=b".to_string()));
}

#[test]
fn test_parse_key_value_rejects_missing_equals() {
    assert!(crate::analytics_commands::parse_key_value("location").is_err());
}
