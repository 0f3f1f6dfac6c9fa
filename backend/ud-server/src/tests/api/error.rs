use crate::ApiError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_store_error_returns_500_with_generic_body() {
    let error = ApiError::store("Failed to add user", "disk I/O error");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json, serde_json::json!({"error": "Failed to add user"}));
}

#[test]
fn test_store_error_display_includes_detail() {
    let error = ApiError::store("Failed to update user", "document users/abc not found");

    let message = error.to_string();

    assert!(message.starts_with("Failed to update user: document users/abc not found"));
}
