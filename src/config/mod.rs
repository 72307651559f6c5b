//! Configuration seam.
//!
//! Configuration is environment-first. A variable is read from the process
//! environment; when it is missing, the conventional `.env` file is loaded *into* the
//! process environment (once) and the variable is read again. Defaults make a key
//! optional without repeating that fallback logic at every call site.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use common_service::config::{load_env, load_env_with_default, DotenvEnvironment};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = DotenvEnvironment::global();
//!
//! let jwt_secret = load_env(source, "JWT_SECRET")?;
//! let port = load_env_with_default(source, "PORT", "8080")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! Resolution functions accept any [`EnvironmentSource`], so unit tests can hand in a
//! double instead of touching the real environment or the filesystem.
//!
//! # Settings
//!
//! - [`DatabaseConfig`] - MongoDB connection settings (`MONGODB_*`)
//! - [`LoggingConfig`] - Logging settings (`LOG_*`)

pub mod env;
pub mod loader;
pub mod schema;
pub mod secret;

pub use env::{DotenvEnvironment, EnvironmentSource};
pub use loader::{load_env, load_env_parsed, load_env_secret, load_env_with_default, resolve};
pub use schema::{DatabaseConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
