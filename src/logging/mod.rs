//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Console output on stderr
//! - Optional local JSON files with daily, hourly or no rotation
//!
//! # Example
//!
//! ```no_run
//! use common_service::logging::init_logging;
//! use common_service::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use common_service::log_error_with_context;
/// use common_service::domain::ServiceError;
///
/// let error = ServiceError::Configuration("MONGODB_URI is empty".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
