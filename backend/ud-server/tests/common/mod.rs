#![allow(dead_code)]

//! Test infrastructure for ud-server API tests

use ud_core::{Document, Fields};
use ud_db::{DocumentStore, SqliteDocumentStore, connect_in_memory};
use ud_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const TEST_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create AppState over an in-memory SQLite store
pub async fn create_test_app_state() -> AppState {
    let store = create_test_store().await;
    AppState::new(Arc::new(store), TEST_STORE_TIMEOUT)
}

/// Create AppState whose store fails every operation (pool closed)
pub async fn create_failing_app_state() -> AppState {
    let store = create_test_store().await;
    store.pool().close().await;
    AppState::new(Arc::new(store), TEST_STORE_TIMEOUT)
}

/// Create AppState whose store answers only after `delay`
pub fn create_slow_app_state(delay: Duration, store_timeout: Duration) -> AppState {
    AppState::new(Arc::new(SlowStore { delay }), store_timeout)
}

/// Store that succeeds with empty results after sleeping
struct SlowStore {
    delay: Duration,
}

#[async_trait]
impl DocumentStore for SlowStore {
    async fn add(&self, _collection: &str, _fields: Fields) -> ud_db::Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok("slow".to_string())
    }

    async fn list(&self, _collection: &str) -> ud_db::Result<Vec<Document>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn get(&self, _collection: &str, _id: &str) -> ud_db::Result<Option<Document>> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn update(&self, _collection: &str, _id: &str, _fields: Fields) -> ud_db::Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn delete(&self, _collection: &str, _id: &str) -> ud_db::Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn delete_many(&self, _collection: &str, _ids: &[String]) -> ud_db::Result<u64> {
        tokio::time::sleep(self.delay).await;
        Ok(0)
    }
}

async fn create_test_store() -> SqliteDocumentStore {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");
    SqliteDocumentStore::new(pool)
}

pub fn create_test_router(state: AppState) -> Router {
    build_router(state)
}

/// Send a request with an optional raw body and decode the JSON response
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// POST a user and return the generated id
pub async fn create_user(app: &Router, body: &str) -> String {
    let (status, json) = send(app, "POST", "/users", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

/// GET /users as a vector of records
pub async fn list_users(app: &Router) -> Vec<Value> {
    let (status, json) = send(app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    json.as_array().unwrap().clone()
}

pub fn find_user<'a>(users: &'a [Value], id: &str) -> Option<&'a Value> {
    users.iter().find(|user| user["id"] == id)
}
