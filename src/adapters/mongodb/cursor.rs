//! Driver-backed cursor and single result

use crate::adapters::database::traits::{Cursor, SingleResult};
use crate::domain::DatabaseError;
use async_trait::async_trait;
use mongodb::bson::Document;

/// [`Cursor`] over a `mongodb::Cursor`
///
/// The driver cursor panics if read before a successful advance, so positioning is
/// tracked here and reported as [`DatabaseError::NoCurrentDocument`] instead.
pub struct MongoCursor {
    inner: Option<mongodb::Cursor<Document>>,
    positioned: bool,
    error: Option<DatabaseError>,
}

impl MongoCursor {
    pub fn new(cursor: mongodb::Cursor<Document>) -> Self {
        Self {
            inner: Some(cursor),
            positioned: false,
            error: None,
        }
    }

    fn fail(&mut self, error: DatabaseError) -> DatabaseError {
        self.positioned = false;
        self.error = Some(error.clone());
        error
    }
}

#[async_trait]
impl Cursor for MongoCursor {
    async fn advance(&mut self) -> bool {
        let Some(inner) = self.inner.as_mut() else {
            self.fail(DatabaseError::CursorClosed);
            return false;
        };

        match inner.advance().await {
            Ok(advanced) => {
                self.positioned = advanced;
                advanced
            }
            Err(e) => {
                self.fail(DatabaseError::QueryFailed(e.to_string()));
                false
            }
        }
    }

    fn current_document(&self) -> Result<Document, DatabaseError> {
        match &self.inner {
            Some(inner) if self.positioned => inner
                .deserialize_current()
                .map_err(|e| DatabaseError::Decode(e.to_string())),
            _ => Err(DatabaseError::NoCurrentDocument),
        }
    }

    async fn drain_all(&mut self) -> Result<Vec<Document>, DatabaseError> {
        let Some(mut inner) = self.inner.take() else {
            return Err(self.fail(DatabaseError::CursorClosed));
        };
        self.positioned = false;

        let mut documents = Vec::new();
        loop {
            match inner.advance().await {
                Ok(true) => match inner.deserialize_current() {
                    Ok(document) => documents.push(document),
                    Err(e) => return Err(self.fail(DatabaseError::Decode(e.to_string()))),
                },
                Ok(false) => break,
                Err(e) => return Err(self.fail(DatabaseError::QueryFailed(e.to_string()))),
            }
        }

        tracing::debug!(count = documents.len(), "Cursor drained");
        Ok(documents)
    }

    fn last_error(&self) -> Option<&DatabaseError> {
        self.error.as_ref()
    }

    async fn close(&mut self) -> Result<(), DatabaseError> {
        // Dropping the driver cursor kills it on the server
        if self.inner.take().is_some() {
            tracing::debug!("Cursor closed");
        }
        self.positioned = false;
        Ok(())
    }
}

/// [`SingleResult`] holding the outcome of a driver `find_one`
#[derive(Debug, Clone)]
pub struct MongoSingleResult {
    outcome: Result<Option<Document>, DatabaseError>,
}

impl From<mongodb::error::Result<Option<Document>>> for MongoSingleResult {
    fn from(result: mongodb::error::Result<Option<Document>>) -> Self {
        Self {
            outcome: result.map_err(|e| DatabaseError::QueryFailed(e.to_string())),
        }
    }
}

impl SingleResult for MongoSingleResult {
    fn document(&self) -> Result<Document, DatabaseError> {
        match &self.outcome {
            Ok(Some(document)) => Ok(document.clone()),
            Ok(None) => Err(DatabaseError::NoDocument),
            Err(e) => Err(e.clone()),
        }
    }
}

const _: fn() = || {
    fn assert_cursor<T: Cursor + 'static>() {
        let _ = |cursor: T| -> Box<dyn Cursor> { Box::new(cursor) };
    }
    fn assert_single<T: SingleResult + 'static>() {
        let _ = |result: T| -> Box<dyn SingleResult> { Box::new(result) };
    }
    assert_cursor::<MongoCursor>();
    assert_single::<MongoSingleResult>();
};
