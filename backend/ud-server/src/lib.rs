pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        create_user_response::CreateUserResponse,
        delete_users_request::DeleteUsersRequest,
        message_response::MessageResponse,
        users::{create_user, delete_user, delete_users, list_users, update_user},
    },
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use state::AppState;
