use crate::{CliClientResult, ClientError};

use ud_core::NewUser;

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the ud-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5001")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // Error bodies are `{"error": "..."}`, but a timeout (408) has none
        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| body.get("error")?.as_str().map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api(status.as_u16(), message));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/users");
        self.execute(req).await
    }

    /// Create a user; the response carries the generated id
    pub async fn create_user(&self, user: &NewUser) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/users").json(user);
        self.execute(req).await
    }

    /// Update a user, sending only the supplied fields
    pub async fn update_user(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
        }

        let body = UpdateRequest { name, email };
        let req = self
            .request(Method::PUT, &format!("/users/{}", id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/users/{}", id));
        self.execute(req).await
    }

    /// Delete several users in one request
    pub async fn delete_users(&self, ids: &[String]) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct DeleteRequest<'a> {
            ids: &'a [String],
        }

        let req = self
            .request(Method::POST, "/users/delete")
            .json(&DeleteRequest { ids });
        self.execute(req).await
    }
}
