// Common Service - MongoDB, environment and credential seams for services
// Copyright (c) 2025 Common Service Contributors
// Licensed under the MIT License

//! # Common Service
//!
//! Shared infrastructure for services that store documents in MongoDB, read their
//! settings from the environment and check user passwords. Each external dependency
//! sits behind a small trait so application code can be tested against doubles:
//!
//! | Seam | Trait | Production adapter |
//! |------|-------|--------------------|
//! | Document database | [`adapters::database::CollectionAdapter`] | [`adapters::mongodb::MongoCollectionAdapter`] |
//! | Connection lifecycle | [`adapters::database::DatabaseLifecycle`] | [`adapters::mongodb::MongoDatabase`] |
//! | Environment | [`config::EnvironmentSource`] | [`config::DotenvEnvironment`] |
//! | Passwords | [`crypto::PasswordHasher`] | [`crypto::BcryptHasher`] |
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`adapters`] - Database traits and the MongoDB implementation
//! - [`config`] - Environment resolution with `.env` fallback, typed settings
//! - [`crypto`] - Password hashing
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use common_service::adapters::database::{CollectionAdapter, DatabaseLifecycle};
//! use common_service::adapters::mongodb::MongoDatabase;
//! use common_service::config::{DatabaseConfig, DotenvEnvironment};
//! use common_service::crypto::{BcryptHasher, PasswordHasher};
//! use mongodb::bson::doc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env(DotenvEnvironment::global())?;
//!
//!     let mut db = MongoDatabase::from_config(&config);
//!     db.connect().await?;
//!
//!     let digest = BcryptHasher::new().hash("correct horse")?;
//!     db.adapter()?
//!         .insert_one(doc! { "email": "ada@example.com", "password": digest }, None)
//!         .await?;
//!
//!     db.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Each seam reports its own error enum ([`domain::DatabaseError`],
//! [`domain::EnvError`], [`domain::CredentialError`]); [`domain::ServiceError`] wraps
//! them for code that composes several seams, so `?` works across all of them.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod logging;
