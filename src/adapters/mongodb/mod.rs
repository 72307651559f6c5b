//! MongoDB implementation of the database traits
//!
//! [`MongoDatabase`] manages the connection lifecycle; [`MongoCollectionAdapter`]
//! forwards collection operations to the official driver.

pub mod adapter;
pub mod client;
pub mod cursor;
pub mod models;

pub use adapter::MongoCollectionAdapter;
pub use client::MongoDatabase;
pub use cursor::{MongoCursor, MongoSingleResult};
pub use models::IndexSpec;
