//! Environment variable resolution with `.env` fallback
//!
//! The process environment is always the source of truth. The fallback file is only
//! ever used to *populate* that same environment, never consulted as a separate
//! lookup path:
//!
//! 1. Read the key. A non-empty value is returned as is.
//! 2. Populate the environment from the fallback file. If that fails, return the
//!    default when one was supplied, otherwise the load error.
//! 3. Read the key again. A non-empty value is returned.
//! 4. Return the default, or fail with [`EnvError::NotSet`] naming the key.
//!
//! An empty default is the same as no default.

use super::env::EnvironmentSource;
use super::secret::{secret_string, SecretString};
use crate::domain::EnvError;
use std::fmt::Display;
use std::str::FromStr;

/// Resolves `key` against `source`, falling back to the env file and then `default`
///
/// # Errors
///
/// Returns [`EnvError::FileLoad`] when the key is missing, the file cannot be loaded
/// and there is no default, or [`EnvError::NotSet`] when the key is missing
/// everywhere and there is no default.
///
/// # Examples
///
/// ```no_run
/// use common_service::config::{resolve, DotenvEnvironment};
///
/// let source = DotenvEnvironment::global();
/// let port = resolve(source, "PORT", Some("8080")).unwrap();
/// ```
pub fn resolve<S>(source: &S, key: &str, default: Option<&str>) -> Result<String, EnvError>
where
    S: EnvironmentSource + ?Sized,
{
    let default = default.filter(|d| !d.is_empty());

    let value = source.read(key);
    if !value.is_empty() {
        return Ok(value);
    }

    if let Err(e) = source.populate_from_file() {
        return match default {
            Some(d) => {
                tracing::debug!(key, error = %e, "Environment file unavailable, using default");
                Ok(d.to_string())
            }
            None => Err(e),
        };
    }

    let value = source.read(key);
    if !value.is_empty() {
        return Ok(value);
    }

    default
        .map(str::to_string)
        .ok_or_else(|| EnvError::NotSet(key.to_string()))
}

/// Resolves a required variable
pub fn load_env<S>(source: &S, key: &str) -> Result<String, EnvError>
where
    S: EnvironmentSource + ?Sized,
{
    resolve(source, key, None)
}

/// Resolves a variable, returning `default` when it cannot be found
///
/// An empty `default` behaves exactly like [`load_env`].
pub fn load_env_with_default<S>(source: &S, key: &str, default: &str) -> Result<String, EnvError>
where
    S: EnvironmentSource + ?Sized,
{
    resolve(source, key, Some(default))
}

/// Resolves a variable and parses it into `T`
///
/// # Errors
///
/// Returns [`EnvError::InvalidValue`] if the resolved value (or the default) does not
/// parse, in addition to the errors of [`resolve`].
pub fn load_env_parsed<S, T>(source: &S, key: &str, default: Option<&str>) -> Result<T, EnvError>
where
    S: EnvironmentSource + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    let raw = resolve(source, key, default)?;
    raw.trim().parse::<T>().map_err(|e| EnvError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Resolves a required credential and wraps it as a secret
pub fn load_env_secret<S>(source: &S, key: &str) -> Result<SecretString, EnvError>
where
    S: EnvironmentSource + ?Sized,
{
    load_env(source, key).map(secret_string)
}
