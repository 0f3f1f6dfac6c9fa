//! REST API error types
//!
//! Every failure is reported to clients as a 500 with a generic
//! `{"error": "..."}` body; the underlying cause is only logged.

use std::fmt::Display;
use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Record store operation failed (500)
    #[error("{message}: {detail} {location}")]
    Store {
        message: &'static str,
        detail: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn store(message: &'static str, detail: impl Display) -> Self {
        ApiError::Store {
            message,
            detail: detail.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let ApiError::Store { message, .. } = self;

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
