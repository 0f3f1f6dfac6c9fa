//! Collection and document handles over a [`DocumentStore`]
//!
//! Mirrors the `collection(name).add/get/doc(id).update/delete` shape the
//! API handlers are written against.

use crate::{DocumentStore, Result as DbErrorResult};

use ud_core::{Document, Fields};

impl dyn DocumentStore {
    pub fn collection<'a>(&'a self, name: &'a str) -> CollectionRef<'a> {
        CollectionRef { store: self, name }
    }
}

#[derive(Clone, Copy)]
pub struct CollectionRef<'a> {
    store: &'a dyn DocumentStore,
    name: &'a str,
}

impl<'a> CollectionRef<'a> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub async fn add(&self, fields: Fields) -> DbErrorResult<String> {
        self.store.add(self.name, fields).await
    }

    pub async fn get(&self) -> DbErrorResult<Vec<Document>> {
        self.store.list(self.name).await
    }

    pub async fn delete_many(&self, ids: &[String]) -> DbErrorResult<u64> {
        self.store.delete_many(self.name, ids).await
    }

    pub fn doc<'b>(&self, id: &'b str) -> DocumentRef<'b>
    where
        'a: 'b,
    {
        DocumentRef {
            store: self.store,
            collection: self.name,
            id,
        }
    }
}

#[derive(Clone, Copy)]
pub struct DocumentRef<'a> {
    store: &'a dyn DocumentStore,
    collection: &'a str,
    id: &'a str,
}

impl DocumentRef<'_> {
    pub fn id(&self) -> &str {
        self.id
    }

    pub async fn get(&self) -> DbErrorResult<Option<Document>> {
        self.store.get(self.collection, self.id).await
    }

    pub async fn update(&self, fields: Fields) -> DbErrorResult<()> {
        self.store.update(self.collection, self.id, fields).await
    }

    pub async fn delete(&self) -> DbErrorResult<()> {
        self.store.delete(self.collection, self.id).await
    }
}
