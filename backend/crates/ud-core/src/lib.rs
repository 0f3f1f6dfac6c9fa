pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::document::{Document, Fields, fields_from_body, fields_from_value};
pub use models::new_user::NewUser;
pub use models::user::User;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";
