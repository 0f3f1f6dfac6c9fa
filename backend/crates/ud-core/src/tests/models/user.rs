use crate::{NewUser, User};

use serde_json::json;

#[test]
fn test_user_deserializes_with_missing_fields() {
    let user: User = serde_json::from_value(json!({"id": "abc123"})).unwrap();

    assert_eq!(user.id, "abc123");
    assert!(user.name.is_empty());
    assert!(user.email.is_empty());
    assert!(!user.has_required_fields());
}

#[test]
fn test_user_deserializes_null_and_non_string_fields() {
    let record = json!({"id": "n1", "name": 5, "email": null});

    let user: User = serde_json::from_value(record).unwrap();

    assert_eq!(user, User::new("n1", "5", ""));
}

#[test]
fn test_user_deserializes_structured_field_as_json_text() {
    let record = json!({"id": "n2", "name": {"first": "Ada"}});

    let user: User = serde_json::from_value(record).unwrap();

    assert_eq!(user.name, r#"{"first":"Ada"}"#);
}

#[test]
fn test_user_merge_keeps_id() {
    let mut user = User::new("abc123", "Ada", "ada@example.com");
    let edited = User::new("abc123", "Ada", "ada@lovelace.dev");

    user.merge(&edited);

    assert_eq!(user, User::new("abc123", "Ada", "ada@lovelace.dev"));
}

#[test]
fn test_new_user_completeness() {
    assert!(NewUser::new("Ada", "ada@example.com").is_complete());
    assert!(!NewUser::new("", "ada@example.com").is_complete());
    assert!(!NewUser::new("Ada", "").is_complete());
    assert!(!NewUser::default().is_complete());
}

#[test]
fn test_new_user_serializes_without_id() {
    let value = serde_json::to_value(NewUser::new("Ada", "ada@example.com")).unwrap();

    assert_eq!(value, json!({"name": "Ada", "email": "ada@example.com"}));
}

#[test]
fn test_into_user_uses_given_id() {
    let user = NewUser::new("Ada", "ada@example.com").into_user("abc123");

    assert_eq!(user.id, "abc123");
    assert_eq!(user.name, "Ada");
}
