//! User REST API handlers
//!
//! Each handler performs exactly one record store call, bounded by the
//! state's store timeout. Request bodies are passed through without
//! validation; only an `id` member is dropped.

use crate::{
    ApiError, ApiResult, AppState, CreateUserResponse, DeleteUsersRequest, MessageResponse,
};

use ud_core::{Document, fields_from_body};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bytes::Bytes;
use serde_json::Value;

const FETCH_FAILED: &str = "Failed to fetch users";
const ADD_FAILED: &str = "Failed to add user";
const UPDATE_FAILED: &str = "Failed to update user";
const DELETE_FAILED: &str = "Failed to delete user";
const DELETE_MANY_FAILED: &str = "Failed to delete users";

// =============================================================================
// Handlers
// =============================================================================

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    let documents = state.run(FETCH_FAILED, state.users().get()).await?;

    Ok(Json(documents.into_iter().map(Document::into_json).collect()))
}

/// POST /users
///
/// An empty body creates a user without fields.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    let fields = fields_from_body(&body).map_err(|e| ApiError::store(ADD_FAILED, e))?;

    let id = state.run(ADD_FAILED, state.users().add(fields)).await?;

    log::info!("Created user {}", id);

    Ok((StatusCode::CREATED, Json(CreateUserResponse { id })))
}

/// PUT /users/{id}
///
/// Merges the supplied fields; an unknown id is a store failure.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let fields = fields_from_body(&body).map_err(|e| ApiError::store(UPDATE_FAILED, e))?;

    state
        .run(UPDATE_FAILED, state.users().doc(&id).update(fields))
        .await?;

    log::info!("Updated user {}", id);

    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .run(DELETE_FAILED, state.users().doc(&id).delete())
        .await?;

    log::info!("Deleted user {}", id);

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// POST /users/delete
///
/// Body: `{"ids": [...]}`
pub async fn delete_users(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let request: DeleteUsersRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::store(DELETE_MANY_FAILED, e))?;

    let deleted = state
        .run(DELETE_MANY_FAILED, state.users().delete_many(&request.ids))
        .await?;

    log::info!(
        "Deleted {} of {} requested users",
        deleted,
        request.ids.len()
    );

    Ok(Json(MessageResponse::new("Users deleted successfully")))
}
