use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeleteUsersRequest {
    /// Users to delete; unknown ids are ignored
    pub ids: Vec<String>,
}
