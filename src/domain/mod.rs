//! Domain types shared by the seams.
//!
//! # Error Handling
//!
//! Each seam reports failures through its own enum:
//!
//! - [`DatabaseError`] - document database adapter, cursors and lifecycle
//! - [`EnvError`] - environment resolution and `.env` population
//! - [`CredentialError`] - password hashing and verification
//!
//! [`ServiceError`] wraps all three so composed code can use `?` freely:
//!
//! ```rust
//! use common_service::domain::{CredentialError, Result};
//!
//! fn check() -> Result<()> {
//!     let outcome: std::result::Result<(), CredentialError> = Err(CredentialError::Mismatch);
//!     outcome?;
//!     Ok(())
//! }
//!
//! assert!(check().is_err());
//! ```

pub mod errors;
pub mod result;

pub use errors::{CredentialError, DatabaseError, EnvError, ServiceError};
pub use result::Result;
