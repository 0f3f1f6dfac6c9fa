mod document;
mod user;
