//! Result type alias for code that composes several seams

use super::errors::ServiceError;

/// Result type alias using [`ServiceError`]
///
/// Seam traits return their own error types (`DatabaseError`, `EnvError`,
/// `CredentialError`); this alias is for call sites that mix them and rely on the
/// `#[from]` conversions.
///
/// # Examples
///
/// ```
/// use common_service::domain::{EnvError, Result};
///
/// fn example() -> Result<String> {
///     let missing: std::result::Result<String, EnvError> =
///         Err(EnvError::NotSet("PORT".to_string()));
///     Ok(missing?)
/// }
///
/// assert!(example().is_err());
/// ```
pub type Result<T> = std::result::Result<T, ServiceError>;
