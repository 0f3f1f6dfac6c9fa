use crate::{DbError, DocumentStore, Result as DbErrorResult, generate_document_id};

use ud_core::{Document, Fields};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Record store backed by a single SQLite `documents` table.
///
/// Field data is kept as a JSON object. An update overwrites each supplied
/// top-level field with the supplied value, `null` and nested objects
/// included, and leaves every other field untouched.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn add(&self, collection: &str, fields: Fields) -> DbErrorResult<String> {
        let id = generate_document_id();
        let data = encode_fields(&id, &fields)?;
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO documents (collection, id, data, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(data)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        log::debug!("Added document {}/{}", collection, id);

        Ok(id)
    }

    async fn list(&self, collection: &str) -> DbErrorResult<Vec<Document>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
              SELECT id, data
              FROM documents
              WHERE collection = ?
              ORDER BY id ASC
              "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, data)| decode_document(id, &data))
            .collect()
    }

    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        let row: Option<(String, String)> = sqlx::query_as(
            r#"
              SELECT id, data
              FROM documents
              WHERE collection = ? AND id = ?
              "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, data)| decode_document(id, &data)).transpose()
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        // Writing first takes the database write lock for the whole
        // read-modify-write, so concurrent updates cannot interleave.
        let touched = sqlx::query(
            r#"
              UPDATE documents
              SET updated_at = ?
              WHERE collection = ? AND id = ?
              "#,
        )
        .bind(now)
        .bind(collection)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if touched.rows_affected() == 0 {
            return Err(DbError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (data,): (String,) =
            sqlx::query_as("SELECT data FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        // Top-level overwrite: supplied values replace stored ones as given
        let mut document = decode_document(id.to_string(), &data)?;
        document.fields.extend(fields);
        let data = encode_fields(id, &document.fields)?;

        sqlx::query("UPDATE documents SET data = ? WHERE collection = ? AND id = ?")
            .bind(data)
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        log::debug!("Updated document {}/{}", collection, id);

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        log::debug!(
            "Deleted document {}/{} (existed: {})",
            collection,
            id,
            result.rows_affected() > 0
        );

        Ok(())
    }

    async fn delete_many(&self, collection: &str, ids: &[String]) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut deleted = 0;

        for id in ids {
            let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            deleted += result.rows_affected();
        }

        tx.commit().await?;

        log::debug!(
            "Deleted {} of {} requested documents from {}",
            deleted,
            ids.len(),
            collection
        );

        Ok(deleted)
    }
}

#[track_caller]
fn encode_fields(id: &str, fields: &Fields) -> DbErrorResult<String> {
    serde_json::to_string(fields).map_err(|source| DbError::Serialization {
        id: id.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn decode_document(id: String, data: &str) -> DbErrorResult<Document> {
    let fields: Fields = serde_json::from_str(data).map_err(|source| DbError::Serialization {
        id: id.clone(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Document::new(id, fields))
}
