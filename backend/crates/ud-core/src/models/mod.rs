pub mod document;
pub mod new_user;
pub mod user;
