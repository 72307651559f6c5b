//! Environment source seam
//!
//! [`EnvironmentSource`] is the capability the resolution functions in
//! [`crate::config::loader`] depend on. [`DotenvEnvironment`] binds it to the real
//! process environment and `dotenvy`; tests substitute a mock.

use crate::domain::EnvError;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Read access to the process environment plus a way to populate it from a file
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentSource: Send + Sync {
    /// Returns the value of `key`, or an empty string when it is unset
    ///
    /// Unset and empty variables are not distinguished.
    fn read(&self, key: &str) -> String;

    /// Loads `KEY=VALUE` pairs from the fallback file into the process environment
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileLoad`] if the file is missing or malformed.
    fn populate_from_file(&self) -> Result<(), EnvError>;
}

/// Process environment backed by `dotenvy`
///
/// File population runs at most once per instance: concurrent first calls block on
/// the same attempt and every later call observes its outcome, success or failure.
/// Variables already present in the process are never overridden by the file.
#[derive(Debug, Default)]
pub struct DotenvEnvironment {
    path: Option<PathBuf>,
    population: OnceLock<Result<PathBuf, EnvError>>,
}

impl DotenvEnvironment {
    /// Source that looks for `.env` in the current directory and its parents
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that loads a specific file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            population: OnceLock::new(),
        }
    }

    /// Process-wide source for the conventional `.env` file
    ///
    /// Sharing this instance gives the "populate at most once per process" guarantee
    /// to every caller that does not need a custom path.
    pub fn global() -> &'static DotenvEnvironment {
        static GLOBAL: OnceLock<DotenvEnvironment> = OnceLock::new();
        GLOBAL.get_or_init(DotenvEnvironment::new)
    }

    /// Path that was loaded, if population already ran and succeeded
    pub fn loaded_path(&self) -> Option<&PathBuf> {
        self.population.get().and_then(|outcome| outcome.as_ref().ok())
    }

    fn load(&self) -> Result<PathBuf, EnvError> {
        let loaded = match &self.path {
            Some(path) => dotenvy::from_path(path).map(|_| path.clone()),
            None => dotenvy::dotenv(),
        };

        match loaded {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Loaded environment file");
                Ok(path)
            }
            Err(e) => Err(EnvError::FileLoad(e.to_string())),
        }
    }
}

impl EnvironmentSource for DotenvEnvironment {
    fn read(&self, key: &str) -> String {
        std::env::var(key).unwrap_or_default()
    }

    fn populate_from_file(&self) -> Result<(), EnvError> {
        self.population
            .get_or_init(|| self.load())
            .clone()
            .map(|_| ())
    }
}

const _: fn() = || {
    fn assert_source<T: EnvironmentSource + 'static>() {
        let _ = |source: T| -> Box<dyn EnvironmentSource> { Box::new(source) };
    }
    assert_source::<DotenvEnvironment>();
};
