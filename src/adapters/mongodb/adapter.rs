//! MongoDB adapter implementing the collection traits
//!
//! Each call is handed to the driver unchanged; only results and errors are
//! translated into the crate's types.

use crate::adapters::database::traits::{
    CollectionAdapter, Cursor, DeleteOutcome, IndexManager, InsertOutcome, SingleResult,
    UpdateOutcome,
};
use crate::adapters::mongodb::cursor::{MongoCursor, MongoSingleResult};
use crate::adapters::mongodb::models::IndexSpec;
use crate::domain::DatabaseError;
use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::options::{
    DeleteOptions, FindOneOptions, FindOptions, InsertOneOptions, UpdateModifications,
    UpdateOptions,
};
use mongodb::Collection;

/// [`CollectionAdapter`] over a driver collection handle
///
/// Cloning is cheap; clones share the client's connection pool.
#[derive(Clone, Debug)]
pub struct MongoCollectionAdapter {
    collection: Collection<Document>,
}

impl MongoCollectionAdapter {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Name of the wrapped collection
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl CollectionAdapter for MongoCollectionAdapter {
    async fn insert_one(
        &self,
        document: Document,
        options: Option<InsertOneOptions>,
    ) -> Result<InsertOutcome, DatabaseError> {
        let result = self
            .collection
            .insert_one(document)
            .with_options(options)
            .await
            .map_err(|e| DatabaseError::InsertFailed(e.to_string()))?;

        tracing::debug!(collection = %self.collection.name(), "Document inserted");
        Ok(result.into())
    }

    async fn update_one(
        &self,
        filter: Document,
        update: UpdateModifications,
        options: Option<UpdateOptions>,
    ) -> Result<UpdateOutcome, DatabaseError> {
        let result = self
            .collection
            .update_one(filter, update)
            .with_options(options)
            .await
            .map_err(|e| DatabaseError::UpdateFailed(e.to_string()))?;

        tracing::debug!(
            collection = %self.collection.name(),
            matched = result.matched_count,
            modified = result.modified_count,
            "Document updated"
        );
        Ok(result.into())
    }

    async fn delete_one(
        &self,
        filter: Document,
        options: Option<DeleteOptions>,
    ) -> Result<DeleteOutcome, DatabaseError> {
        let result = self
            .collection
            .delete_one(filter)
            .with_options(options)
            .await
            .map_err(|e| DatabaseError::DeleteFailed(e.to_string()))?;

        tracing::debug!(
            collection = %self.collection.name(),
            deleted = result.deleted_count,
            "Document deleted"
        );
        Ok(result.into())
    }

    async fn find_one(
        &self,
        filter: Document,
        options: Option<FindOneOptions>,
    ) -> Box<dyn SingleResult> {
        let outcome = self.collection.find_one(filter).with_options(options).await;
        Box::new(MongoSingleResult::from(outcome))
    }

    async fn find(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Box<dyn Cursor>, DatabaseError> {
        let cursor = self
            .collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(Box::new(MongoCursor::new(cursor)))
    }
}

#[async_trait]
impl IndexManager for MongoCollectionAdapter {
    async fn create_index(&self, spec: &IndexSpec) -> Result<String, DatabaseError> {
        self.collection
            .create_index(spec.to_model())
            .await
            .map(|result| result.index_name)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))
    }
}

const _: fn() = || {
    fn assert_collection<T: CollectionAdapter + 'static>() {
        let _ = |adapter: T| -> Box<dyn CollectionAdapter> { Box::new(adapter) };
    }
    fn assert_indexes<T: IndexManager + 'static>() {
        let _ = |adapter: T| -> Box<dyn IndexManager> { Box::new(adapter) };
    }
    assert_collection::<MongoCollectionAdapter>();
    assert_indexes::<MongoCollectionAdapter>();
};
