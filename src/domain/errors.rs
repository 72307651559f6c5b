//! Domain error types
//!
//! Every seam has its own error enum so callers can match on the outcomes that matter
//! to them (a missing document, an unset variable, a wrong password) without digging
//! through a generic error. [`ServiceError`] wraps all of them for call sites that
//! compose several seams.
//!
//! None of the variants carry third-party types: driver and library errors are
//! rendered to strings at the seam boundary, which also keeps the seam errors `Clone`.

use thiserror::Error;

/// Umbrella error for code that wires several seams together
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Environment resolution errors
    #[error("Environment error: {0}")]
    Environment(#[from] EnvError),

    /// Document database errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Password hashing and verification errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

/// Document database errors
///
/// Connectivity failures (`ConnectionFailed`, `PingFailed`) are fatal to a startup
/// sequence and are never retried here. `NoDocument` is reported separately from
/// `Decode` so a lookup miss can be told apart from a schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// Failed to build the client or reach the server
    #[error("Failed to connect to MongoDB: {0}")]
    ConnectionFailed(String),

    /// The server did not answer the liveness check
    #[error("MongoDB ping failed: {0}")]
    PingFailed(String),

    /// An operation needed a bound collection before `connect` was called
    #[error("Database is not connected")]
    NotConnected,

    /// A single-document lookup matched nothing
    #[error("No document matched the filter")]
    NoDocument,

    /// A cursor was read without a successful `advance`
    #[error("Cursor has no current document")]
    NoCurrentDocument,

    /// A cursor was used after `close`
    #[error("Cursor is closed")]
    CursorClosed,

    /// A document could not be deserialized into the requested type
    #[error("Failed to decode document: {0}")]
    Decode(String),

    /// Failed to insert a document
    #[error("Failed to insert document: {0}")]
    InsertFailed(String),

    /// Failed to update a document
    #[error("Failed to update document: {0}")]
    UpdateFailed(String),

    /// Failed to delete a document
    #[error("Failed to delete document: {0}")]
    DeleteFailed(String),

    /// Failed to run a query or iterate its results
    #[error("Failed to query documents: {0}")]
    QueryFailed(String),

    /// An index specification was rejected; earlier specifications stay applied
    #[error("Failed to create index #{position}: {message}")]
    IndexCreationFailed { position: usize, message: String },
}

/// Environment resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The variable is unset (or empty) in the process and in the fallback file
    #[error("{0} environment variable not set")]
    NotSet(String),

    /// The fallback file is missing or malformed
    #[error("Failed to load environment file: {0}")]
    FileLoad(String),

    /// The variable is set but cannot be parsed into the requested type
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Password hashing and verification errors
///
/// `Mismatch` is the expected outcome of a wrong password and should map to
/// "authentication denied". Every other variant is an internal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The password does not match the stored digest
    #[error("Password does not match")]
    Mismatch,

    /// The stored digest is not a well-formed bcrypt string
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),

    /// The password exceeds the algorithm's input limit
    #[error("Password is {length} bytes, maximum is {max}")]
    PasswordTooLong { length: usize, max: usize },

    /// The cost factor is outside the range the algorithm accepts
    #[error("Invalid bcrypt cost {0}, must be between 4 and 31")]
    InvalidCost(u32),

    /// The hashing primitive rejected the input
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

impl CredentialError {
    /// Returns true for a wrong password, false for structural or internal failures
    pub fn is_mismatch(&self) -> bool {
        matches!(self, CredentialError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_not_set_names_the_key() {
        let err = EnvError::NotSet("NON_EXISTENT_VAR".to_string());
        assert_eq!(
            err.to_string(),
            "NON_EXISTENT_VAR environment variable not set"
        );
    }

    #[test]
    fn test_database_error_conversion() {
        let err: ServiceError = DatabaseError::NoDocument.into();
        assert!(matches!(err, ServiceError::Database(DatabaseError::NoDocument)));
        assert_eq!(err.to_string(), "Database error: No document matched the filter");
    }

    #[test]
    fn test_credential_error_conversion() {
        let err: ServiceError = CredentialError::Mismatch.into();
        assert!(matches!(err, ServiceError::Credential(_)));
    }

    #[test]
    fn test_is_mismatch() {
        assert!(CredentialError::Mismatch.is_mismatch());
        assert!(!CredentialError::MalformedDigest("bad".to_string()).is_mismatch());
        assert!(!CredentialError::InvalidCost(2).is_mismatch());
    }

    #[test]
    fn test_index_creation_failed_display() {
        let err = DatabaseError::IndexCreationFailed {
            position: 0,
            message: "duplicate key".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to create index #0: duplicate key");
    }

    #[test]
    fn test_service_error_implements_std_error() {
        let err = ServiceError::Configuration("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
