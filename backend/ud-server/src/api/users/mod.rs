pub mod create_user_response;
pub mod delete_users_request;
pub mod message_response;
#[allow(clippy::module_inception)]
pub mod users;
