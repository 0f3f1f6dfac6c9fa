use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user record as seen by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    // The server stores bodies verbatim, so name/email may be missing,
    // null or not a string at all
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

/// Strings as-is, `null` as empty, any other JSON value as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both `name` and `email` are non-empty
    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Overwrite the editable fields with those of `edited`.
    pub fn merge(&mut self, edited: &User) {
        self.name.clone_from(&edited.name);
        self.email.clone_from(&edited.email);
    }
}
