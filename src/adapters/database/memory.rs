//! In-memory cursor and single result
//!
//! Drop-in substitutes for the driver-backed types, for tests of code written against
//! [`CollectionAdapter`](super::traits::CollectionAdapter). They follow the same
//! contracts as the MongoDB implementations, including the exhaustion/error
//! conflation of [`Cursor::advance`].

use super::traits::{Cursor, SingleResult};
use crate::domain::DatabaseError;
use async_trait::async_trait;
use mongodb::bson::Document;
use std::collections::VecDeque;

/// Cursor over a fixed list of documents
///
/// # Example
///
/// ```rust
/// use common_service::adapters::database::{Cursor, CursorExt, MemoryCursor};
/// use mongodb::bson::doc;
///
/// # async fn example() {
/// let mut cursor = MemoryCursor::new(vec![doc! { "n": 1 }, doc! { "n": 2 }]);
/// while cursor.advance().await {
///     let _n: mongodb::bson::Document = cursor.decode_current().unwrap();
/// }
/// assert!(cursor.last_error().is_none());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryCursor {
    remaining: VecDeque<Document>,
    current: Option<Document>,
    pending_error: Option<DatabaseError>,
    error: Option<DatabaseError>,
    closed: bool,
}

impl MemoryCursor {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            remaining: documents.into(),
            ..Self::default()
        }
    }

    /// Cursor that yields `documents` and then fails with `error` instead of ending
    pub fn failing_after(documents: Vec<Document>, error: DatabaseError) -> Self {
        Self {
            remaining: documents.into(),
            pending_error: Some(error),
            ..Self::default()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[async_trait]
impl Cursor for MemoryCursor {
    async fn advance(&mut self) -> bool {
        if self.closed {
            self.current = None;
            self.error = Some(DatabaseError::CursorClosed);
            return false;
        }

        match self.remaining.pop_front() {
            Some(document) => {
                self.current = Some(document);
                true
            }
            None => {
                self.current = None;
                if let Some(error) = self.pending_error.take() {
                    self.error = Some(error);
                }
                false
            }
        }
    }

    fn current_document(&self) -> Result<Document, DatabaseError> {
        self.current.clone().ok_or(DatabaseError::NoCurrentDocument)
    }

    async fn drain_all(&mut self) -> Result<Vec<Document>, DatabaseError> {
        if self.closed {
            self.error = Some(DatabaseError::CursorClosed);
            return Err(DatabaseError::CursorClosed);
        }

        let documents: Vec<Document> = self.remaining.drain(..).collect();
        let outcome = match self.pending_error.take() {
            Some(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
            None => Ok(documents),
        };

        self.close().await?;
        outcome
    }

    fn last_error(&self) -> Option<&DatabaseError> {
        self.error.as_ref()
    }

    async fn close(&mut self) -> Result<(), DatabaseError> {
        self.closed = true;
        self.current = None;
        self.remaining.clear();
        Ok(())
    }
}

/// Single result with a fixed outcome
#[derive(Debug, Clone)]
pub struct MemorySingleResult {
    outcome: Result<Option<Document>, DatabaseError>,
}

impl MemorySingleResult {
    /// A lookup that matched `document`
    pub fn found(document: Document) -> Self {
        Self {
            outcome: Ok(Some(document)),
        }
    }

    /// A lookup that matched nothing
    pub fn missing() -> Self {
        Self { outcome: Ok(None) }
    }

    /// A lookup whose operation failed
    pub fn failed(error: DatabaseError) -> Self {
        Self { outcome: Err(error) }
    }
}

impl SingleResult for MemorySingleResult {
    fn document(&self) -> Result<Document, DatabaseError> {
        match &self.outcome {
            Ok(Some(document)) => Ok(document.clone()),
            Ok(None) => Err(DatabaseError::NoDocument),
            Err(e) => Err(e.clone()),
        }
    }
}
