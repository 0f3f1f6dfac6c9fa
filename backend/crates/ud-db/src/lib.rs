pub mod collection;
pub mod connection;
pub mod document_id;
pub mod document_store;
pub mod error;
pub mod sqlite_document_store;


pub use collection::{CollectionRef, DocumentRef};
pub use connection::{MIGRATOR, connect, connect_in_memory};
pub use document_id::generate_document_id;
pub use document_store::DocumentStore;
pub use error::{DbError, Result};
pub use sqlite_document_store::SqliteDocumentStore;
