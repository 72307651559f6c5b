//! Database abstraction layer
//!
//! This module provides the trait-based seam between services and the document
//! database, plus in-memory cursor and result types for tests.

pub mod memory;
pub mod traits;

pub use memory::{MemoryCursor, MemorySingleResult};
pub use traits::{
    apply_index_specs, CollectionAdapter, Cursor, CursorExt, DatabaseLifecycle, DeleteOutcome,
    IndexManager, InsertOutcome, SingleResult, SingleResultExt, UpdateOutcome,
};
