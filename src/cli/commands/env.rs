//! `env` command: resolve one variable the way services do

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::{resolve, EnvironmentSource};
use crate::domain::EnvError;
use clap::Args;

/// Arguments for the env command
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Variable name
    pub key: String,

    /// Value used when the variable is unset in the environment and the env file
    #[arg(long)]
    pub default: Option<String>,
}

impl EnvArgs {
    /// Resolve the variable against `source`
    pub fn lookup(&self, source: &dyn EnvironmentSource) -> Result<String, EnvError> {
        resolve(source, &self.key, self.default.as_deref())
    }

    /// Execute the env command
    pub fn execute(&self, source: &dyn EnvironmentSource) -> anyhow::Result<i32> {
        tracing::debug!(key = %self.key, "Resolving environment variable");

        match self.lookup(source) {
            Ok(value) => {
                println!("{value}");
                Ok(EXIT_OK)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Ok(EXIT_CONFIG)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MockEnvironmentSource;

    fn args(key: &str, default: Option<&str>) -> EnvArgs {
        EnvArgs {
            key: key.to_string(),
            default: default.map(str::to_string),
        }
    }

    #[test]
    fn test_lookup_set_variable() {
        let mut source = MockEnvironmentSource::new();
        source
            .expect_read()
            .withf(|key| key == "APP_PORT")
            .return_const("8080".to_string());
        source.expect_populate_from_file().never();

        assert_eq!(args("APP_PORT", None).lookup(&source).unwrap(), "8080");
    }

    #[test]
    fn test_execute_unset_without_default() {
        let mut source = MockEnvironmentSource::new();
        source.expect_read().return_const(String::new());
        source.expect_populate_from_file().returning(|| Ok(()));

        let code = args("APP_PORT", None).execute(&source).unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[test]
    fn test_execute_falls_back_to_default() {
        let mut source = MockEnvironmentSource::new();
        source.expect_read().return_const(String::new());
        source
            .expect_populate_from_file()
            .returning(|| Err(EnvError::FileLoad("no .env".to_string())));

        let env = args("APP_PORT", Some("3000"));
        assert_eq!(env.lookup(&source).unwrap(), "3000");
        assert_eq!(env.execute(&source).unwrap(), EXIT_OK);
    }
}
