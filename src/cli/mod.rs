//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the service toolkit using clap.

pub mod commands;

use crate::config::EnvironmentSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Common Service - MongoDB, environment and credential tooling
#[derive(Parser, Debug)]
#[command(name = "common-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Env file to fall back on instead of the nearest `.env`
    #[arg(short, long, env = "COMMON_SERVICE_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an environment variable, falling back to the env file
    Env(commands::env::EnvArgs),

    /// Hash or verify passwords
    Password(commands::password::PasswordArgs),

    /// MongoDB connectivity and index management
    Db(commands::database::DbArgs),
}

impl Cli {
    /// Execute the selected command and return the process exit code
    pub async fn execute(&self, source: &dyn EnvironmentSource) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Env(args) => args.execute(source),
            Commands::Password(args) => args.execute(),
            Commands::Db(args) => args.execute(source).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::commands::database::DbCommand;
    use super::commands::password::PasswordCommand;
    use super::*;

    #[test]
    fn test_cli_parse_env() {
        let cli = Cli::parse_from(["common-service", "env", "MONGODB_URI"]);
        match cli.command {
            Commands::Env(args) => {
                assert_eq!(args.key, "MONGODB_URI");
                assert!(args.default.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_env_with_default() {
        let cli = Cli::parse_from(["common-service", "env", "PORT", "--default", "8080"]);
        assert!(matches!(
            cli.command,
            Commands::Env(ref args) if args.default.as_deref() == Some("8080")
        ));
    }

    #[test]
    fn test_cli_parse_with_env_file() {
        let cli = Cli::parse_from(["common-service", "--env-file", "staging.env", "db", "ping"]);
        assert_eq!(cli.env_file, Some(PathBuf::from("staging.env")));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["common-service", "--log-level", "debug", "db", "ping"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_password_hash() {
        let cli = Cli::parse_from(["common-service", "password", "hash", "--cost", "12"]);
        match cli.command {
            Commands::Password(args) => match args.command {
                PasswordCommand::Hash(hash) => {
                    assert_eq!(hash.cost, 12);
                    assert!(hash.password.is_none());
                }
                other => panic!("unexpected subcommand: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_password_verify_requires_digest() {
        assert!(Cli::try_parse_from(["common-service", "password", "verify"]).is_err());

        let cli = Cli::parse_from([
            "common-service",
            "password",
            "verify",
            "--digest",
            "$2b$10$abc",
        ]);
        assert!(matches!(
            cli.command,
            Commands::Password(ref args) if matches!(args.command, PasswordCommand::Verify(_))
        ));
    }

    #[test]
    fn test_cli_parse_create_indexes() {
        let cli = Cli::parse_from([
            "common-service",
            "db",
            "create-indexes",
            "--file",
            "indexes.json",
        ]);
        match cli.command {
            Commands::Db(args) => match args.command {
                DbCommand::CreateIndexes(create) => {
                    assert_eq!(create.file, PathBuf::from("indexes.json"));
                }
                other => panic!("unexpected subcommand: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
