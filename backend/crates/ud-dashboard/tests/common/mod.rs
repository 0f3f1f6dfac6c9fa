#![allow(dead_code)]

use ud_dashboard::{Client, Dashboard};

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn create_client(server: &MockServer) -> Client {
    Client::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

pub fn create_dashboard(server: &MockServer) -> Dashboard {
    Dashboard::new(create_client(server))
}

pub fn ada() -> Value {
    json!({"id": "a1", "name": "Ada", "email": "ada@x.io"})
}

pub fn grace() -> Value {
    json!({"id": "g1", "name": "Grace", "email": "grace@x.io"})
}

/// Serve `users` from GET /users
pub async fn mount_users(server: &MockServer, users: Value) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(server)
        .await;
}

/// A dashboard already mounted with Ada and Grace
pub async fn mounted_dashboard(server: &MockServer) -> Dashboard {
    mount_users(server, json!([ada(), grace()])).await;
    let mut dashboard = create_dashboard(server);
    dashboard.mount().await;
    dashboard
}

pub fn store_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(json!({"error": message}))
}
