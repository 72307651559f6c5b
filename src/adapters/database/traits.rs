//! Database capability traits
//!
//! Services depend on these traits instead of on the MongoDB driver, so that the one
//! point where control crosses into the database can be replaced by a test double.
//! The traits deal in raw BSON [`Document`]s to stay object safe; typed decoding is
//! layered on top by the [`CursorExt`] and [`SingleResultExt`] extension traits.

use crate::adapters::mongodb::models::IndexSpec;
use crate::domain::DatabaseError;
use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use mongodb::options::{
    DeleteOptions, FindOneOptions, FindOptions, InsertOneOptions, UpdateModifications,
    UpdateOptions,
};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::de::DeserializeOwned;

/// Result of an `insert_one`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    /// `_id` of the inserted document
    pub inserted_id: Bson,
}

/// Result of an `update_one`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateOutcome {
    /// Number of documents that matched the filter
    pub matched_count: u64,

    /// Number of documents that were modified
    pub modified_count: u64,

    /// `_id` of the upserted document, if an upsert happened
    pub upserted_id: Option<Bson>,
}

/// Result of a `delete_one`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    /// Number of documents deleted
    pub deleted_count: u64,
}

impl From<InsertOneResult> for InsertOutcome {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: result.inserted_id,
        }
    }
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        }
    }
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        Self {
            deleted_count: result.deleted_count,
        }
    }
}

/// Lazily advancing handle over a sequence of result documents
///
/// A cursor is advanced from one task at a time; every method that moves it takes
/// `&mut self`.
#[async_trait]
pub trait Cursor: Send {
    /// Move to the next document
    ///
    /// Returns `false` both when the sequence is exhausted and when an error occurred.
    /// Check [`last_error`](Cursor::last_error) after a `false` to tell them apart.
    async fn advance(&mut self) -> bool;

    /// The document the cursor is positioned on
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::NoCurrentDocument`] without a prior successful advance.
    fn current_document(&self) -> Result<Document, DatabaseError>;

    /// Collect every remaining document and close the cursor
    ///
    /// On error nothing collected so far is returned.
    async fn drain_all(&mut self) -> Result<Vec<Document>, DatabaseError>;

    /// The error that stopped the last [`advance`](Cursor::advance), if any
    fn last_error(&self) -> Option<&DatabaseError>;

    /// Release client and server resources
    ///
    /// Closing an exhausted or already closed cursor is a no-op.
    async fn close(&mut self) -> Result<(), DatabaseError>;
}

/// Outcome of an operation that returns at most one document
///
/// Errors from the operation itself are deferred until the result is read.
pub trait SingleResult: Send + Sync {
    /// The matched document
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::NoDocument`] when nothing matched, or the deferred
    /// error of the operation.
    fn document(&self) -> Result<Document, DatabaseError>;
}

/// Typed decoding for any [`Cursor`], including `Box<dyn Cursor>`
#[async_trait]
pub trait CursorExt: Cursor {
    /// Decode the current document into `T`
    fn decode_current<T: DeserializeOwned>(&self) -> Result<T, DatabaseError> {
        decode(self.current_document()?)
    }

    /// Collect and decode every remaining document, then close the cursor
    async fn drain_all_as<T>(&mut self) -> Result<Vec<T>, DatabaseError>
    where
        T: DeserializeOwned + Send,
    {
        self.drain_all().await?.into_iter().map(decode).collect()
    }
}

impl<C: Cursor + ?Sized> CursorExt for C {}

/// Typed decoding for any [`SingleResult`]
pub trait SingleResultExt: SingleResult {
    /// Decode the matched document into `T`
    ///
    /// # Errors
    ///
    /// [`DatabaseError::NoDocument`] when nothing matched, [`DatabaseError::Decode`]
    /// when the document does not fit `T`.
    fn decode<T: DeserializeOwned>(&self) -> Result<T, DatabaseError> {
        decode(self.document()?)
    }
}

impl<R: SingleResult + ?Sized> SingleResultExt for R {}

fn decode<T: DeserializeOwned>(document: Document) -> Result<T, DatabaseError> {
    bson::from_document(document).map_err(|e| DatabaseError::Decode(e.to_string()))
}

/// CRUD operations against one document collection
///
/// Every method forwards its arguments unchanged to the driver. Only cursors and
/// single results are wrapped, in [`Cursor`] and [`SingleResult`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionAdapter: Send + Sync {
    async fn insert_one(
        &self,
        document: Document,
        options: Option<InsertOneOptions>,
    ) -> Result<InsertOutcome, DatabaseError>;

    async fn update_one(
        &self,
        filter: Document,
        update: UpdateModifications,
        options: Option<UpdateOptions>,
    ) -> Result<UpdateOutcome, DatabaseError>;

    async fn delete_one(
        &self,
        filter: Document,
        options: Option<DeleteOptions>,
    ) -> Result<DeleteOutcome, DatabaseError>;

    /// Look up a single document; failures surface when the result is read
    async fn find_one(
        &self,
        filter: Document,
        options: Option<FindOneOptions>,
    ) -> Box<dyn SingleResult>;

    async fn find(
        &self,
        filter: Document,
        options: Option<FindOptions>,
    ) -> Result<Box<dyn Cursor>, DatabaseError>;
}

/// Index creation on one collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndexManager: Send + Sync {
    /// Create one index and return its name
    async fn create_index(&self, spec: &IndexSpec) -> Result<String, DatabaseError>;
}

/// Connection lifecycle of a database holder
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseLifecycle: Send + Sync {
    /// Connect, verify liveness with a ping and bind the working collection
    ///
    /// A no-op when already connected.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::ConnectionFailed`] or [`DatabaseError::PingFailed`].
    async fn connect(&mut self) -> Result<(), DatabaseError>;

    /// Release the connection; a no-op if never connected
    ///
    /// Returns without waiting for cursors that are still held. Those cursors fail on
    /// their next advance.
    async fn disconnect(&mut self) -> Result<(), DatabaseError>;

    /// Apply index specifications in order, stopping at the first failure
    ///
    /// Indexes created before the failure are left in place.
    async fn create_indexes(&self, specs: &[IndexSpec]) -> Result<(), DatabaseError>;
}

/// Apply `specs` through `manager` sequentially, failing fast
///
/// # Errors
///
/// Returns [`DatabaseError::IndexCreationFailed`] carrying the zero-based position of
/// the rejected specification. Nothing after it is attempted and nothing before it is
/// rolled back.
pub async fn apply_index_specs<M>(manager: &M, specs: &[IndexSpec]) -> Result<(), DatabaseError>
where
    M: IndexManager + ?Sized,
{
    for (position, spec) in specs.iter().enumerate() {
        let name = manager
            .create_index(spec)
            .await
            .map_err(|e| DatabaseError::IndexCreationFailed {
                position,
                message: e.to_string(),
            })?;

        tracing::info!(index = %name, position, "Index created");
    }
    Ok(())
}
