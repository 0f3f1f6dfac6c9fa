use crate::{AppState, create_user, delete_user, delete_users, health, list_users, update_user};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/users", get(list_users).post(create_user))
        .route("/users/delete", post(delete_users))
        .route("/users/{id}", put(update_user).delete(delete_user))
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state)
        // Any origin may call the API
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
