//! CLI command implementations
//!
//! Every command returns its process exit code; errors that are part of normal
//! operation (unset variables, wrong passwords, unreachable servers) are reported
//! on the console and mapped to a code rather than propagated.

pub mod database;
pub mod env;
pub mod password;

/// Success
pub const EXIT_OK: i32 = 0;

/// Password did not match the digest
pub const EXIT_MISMATCH: i32 = 1;

/// Missing or invalid configuration
pub const EXIT_CONFIG: i32 = 2;

/// Database connection or operation failure
pub const EXIT_DATABASE: i32 = 3;

/// Unexpected failure
pub const EXIT_FATAL: i32 = 5;
