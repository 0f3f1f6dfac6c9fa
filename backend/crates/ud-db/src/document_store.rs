use crate::Result as DbErrorResult;

use ud_core::{Document, Fields};

use async_trait::async_trait;

/// Capability interface of the record store.
///
/// Contract every implementation honors:
/// * `add` generates and returns the document identifier
/// * `update` overwrites the given top-level fields of an existing document,
///   keeps the others, and fails with [`crate::DbError::DocumentNotFound`]
///   when there is none
/// * `delete` and `delete_many` succeed whether or not the documents exist
/// * each write is atomic per document
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn add(&self, collection: &str, fields: Fields) -> DbErrorResult<String>;

    /// All documents of a collection in the store's natural order
    async fn list(&self, collection: &str) -> DbErrorResult<Vec<Document>>;

    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>>;

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> DbErrorResult<()>;

    async fn delete(&self, collection: &str, id: &str) -> DbErrorResult<()>;

    /// Delete several documents in one transaction, returning how many existed
    async fn delete_many(&self, collection: &str, ids: &[String]) -> DbErrorResult<u64>;
}
