use crate::User;

use serde::{Deserialize, Serialize};

/// Draft of a user that has not been stored yet (no id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Attach the store-assigned id.
    pub fn into_user(self, id: impl Into<String>) -> User {
        User::new(id, self.name, self.email)
    }
}
