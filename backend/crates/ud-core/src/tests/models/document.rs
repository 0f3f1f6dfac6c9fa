use crate::{CoreError, Document, Fields, fields_from_body, fields_from_value};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_empty_body_when_parsed_then_empty_fields() {
    let fields = fields_from_body(b"").unwrap();
    assert_that!(fields.len(), eq(0));

    let fields = fields_from_body(b"  \n").unwrap();
    assert_that!(fields.len(), eq(0));
}

#[test]
fn given_object_body_when_parsed_then_fields_kept() {
    let fields = fields_from_body(br#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();

    assert_eq!(fields.get("name"), Some(&json!("Ada")));
    assert_eq!(fields.get("email"), Some(&json!("ada@example.com")));
}

#[test]
fn given_body_with_id_when_parsed_then_id_dropped() {
    let fields = fields_from_body(br#"{"id":"client-made","name":"Ada"}"#).unwrap();

    assert_that!(fields.contains_key("id"), eq(false));
    assert_eq!(fields.get("name"), Some(&json!("Ada")));
}

#[test]
fn given_malformed_json_when_parsed_then_invalid_document() {
    let result = fields_from_body(b"{name: Ada");

    assert!(matches!(result, Err(CoreError::InvalidDocument { .. })));
}

#[test]
fn given_non_object_when_converted_then_invalid_document() {
    for value in [json!([1, 2]), json!("Ada"), json!(42), json!(null)] {
        let result = fields_from_value(value);
        assert!(matches!(result, Err(CoreError::InvalidDocument { .. })));
    }
}

#[test]
fn test_into_json_includes_id() {
    let mut fields = Fields::new();
    fields.insert("name".into(), json!("Ada"));
    let document = Document::new("abc123", fields);

    assert_eq!(document.get_str("name"), Some("Ada"));
    assert_eq!(document.into_json(), json!({"id": "abc123", "name": "Ada"}));
}
