use crate::{ApiError, ApiResult};

use ud_core::USERS_COLLECTION;
use ud_db::{CollectionRef, DocumentStore};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Shared handler state; the store is the only shared resource
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    /// Upper bound for a single store call
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    pub fn users(&self) -> CollectionRef<'_> {
        self.store.collection(USERS_COLLECTION)
    }

    /// Await a store call, reporting failure and timeout alike as `message`.
    pub async fn run<T>(
        &self,
        message: &'static str,
        operation: impl Future<Output = ud_db::Result<T>>,
    ) -> ApiResult<T> {
        match tokio::time::timeout(self.store_timeout, operation).await {
            Ok(result) => result.map_err(|e| ApiError::store(message, e)),
            Err(elapsed) => Err(ApiError::store(
                message,
                format!("store call timed out ({elapsed})"),
            )),
        }
    }
}
