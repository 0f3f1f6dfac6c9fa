use crate::{CoreError, Result as CoreErrorResult};

use serde_json::{Map, Value};

/// Field map of a stored document
pub type Fields = Map<String, Value>;

/// Member name reserved for the store-assigned document identifier
const ID_FIELD: &str = "id";

/// A document as enumerated from the record store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Render as a JSON object: the stored fields plus `"id"`.
    pub fn into_json(self) -> Value {
        let mut object = self.fields;
        object.insert(ID_FIELD.to_string(), Value::String(self.id));
        Value::Object(object)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Parse a raw request body into document fields.
///
/// An empty body becomes an empty field map. Anything that is not a JSON
/// object is rejected.
#[track_caller]
pub fn fields_from_body(body: &[u8]) -> CoreErrorResult<Fields> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Fields::new());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| CoreError::invalid_document(format!("malformed JSON: {e}")))?;

    fields_from_value(value)
}

/// Convert a JSON value into document fields, dropping any `id` member.
#[track_caller]
pub fn fields_from_value(value: Value) -> CoreErrorResult<Fields> {
    match value {
        Value::Object(mut fields) => {
            fields.remove(ID_FIELD);
            Ok(fields)
        }
        other => Err(CoreError::invalid_document(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
