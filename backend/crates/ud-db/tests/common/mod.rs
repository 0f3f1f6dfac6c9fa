#![allow(dead_code)]

use ud_core::Fields;
use ud_db::{DocumentStore, SqliteDocumentStore, connect_in_memory};

use std::sync::Arc;

use serde_json::{Value, json};

/// Creates a store over an in-memory SQLite database with migrations run
pub async fn create_test_store() -> Arc<dyn DocumentStore> {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");

    Arc::new(SqliteDocumentStore::new(pool))
}

/// Builds a field map from a JSON object literal
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn ada() -> Fields {
    fields(json!({"name": "Ada", "email": "ada@example.com"}))
}
