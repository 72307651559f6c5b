//! Credential hashing seam.
//!
//! Services store and check passwords through the [`PasswordHasher`] trait; the
//! [`BcryptHasher`] adapter binds it to bcrypt.
//!
//! ```rust
//! use common_service::crypto::{BcryptHasher, PasswordHasher};
//!
//! let hasher = BcryptHasher::with_cost(4).unwrap();
//! let digest = hasher.hash("correct horse").unwrap();
//!
//! assert!(hasher.verify("correct horse", &digest).is_ok());
//! assert!(hasher.verify("battery staple", &digest).unwrap_err().is_mismatch());
//! ```
//!
//! Hashing is CPU-bound and runs on the calling thread. Async callers with a high
//! login rate may want to move it onto `tokio::task::spawn_blocking` themselves.

pub mod bcrypt_hasher;
pub mod hasher;

pub use bcrypt_hasher::{BcryptHasher, DEFAULT_COST, MAX_PASSWORD_BYTES};
pub use hasher::PasswordHasher;
