//! External system integrations.
//!
//! - [`database`] - Database abstraction layer (trait-based)
//! - [`mongodb`] - MongoDB implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. Services hold a
//! `Box<dyn CollectionAdapter>` or a generic `C: CollectionAdapter` and never name
//! the driver directly.
//!
//! ```rust,no_run
//! use common_service::adapters::database::{CollectionAdapter, DatabaseLifecycle, SingleResultExt};
//! use common_service::adapters::mongodb::MongoDatabase;
//! use mongodb::bson::{doc, Document};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = MongoDatabase::new("mongodb://localhost:27017", "app", "users");
//! db.connect().await?;
//!
//! let users = db.adapter()?;
//! users.insert_one(doc! { "email": "ada@example.com" }, None).await?;
//! let found: Document = users
//!     .find_one(doc! { "email": "ada@example.com" }, None)
//!     .await
//!     .decode()?;
//! # let _ = found;
//!
//! db.disconnect().await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod mongodb;
