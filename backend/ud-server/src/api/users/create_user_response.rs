use serde::Serialize;

/// Identifier assigned to a newly created user
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: String,
}
