//! `password` command: hash a password or check one against a stored digest
//!
//! The password comes from `--password` or, when that is omitted, from the first
//! line of stdin so it stays out of shell history.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_MISMATCH, EXIT_OK};
use crate::crypto::{BcryptHasher, PasswordHasher, DEFAULT_COST};
use crate::domain::CredentialError;
use anyhow::Context;
use clap::{Args, Subcommand};
use std::io::BufRead;

/// Arguments for the password command
#[derive(Args, Debug)]
pub struct PasswordArgs {
    #[command(subcommand)]
    pub command: PasswordCommand,
}

/// Password operations
#[derive(Subcommand, Debug)]
pub enum PasswordCommand {
    /// Print a bcrypt digest for a password
    Hash(HashArgs),

    /// Check a password against a digest (exit code 1 on mismatch)
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Password to hash; read from stdin when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// bcrypt cost factor (4-31)
    #[arg(long, default_value_t = DEFAULT_COST)]
    pub cost: u32,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Stored digest, e.g. `$2b$10$...`
    #[arg(long)]
    pub digest: String,

    /// Password to check; read from stdin when omitted
    #[arg(long)]
    pub password: Option<String>,
}

impl PasswordArgs {
    /// Execute the password command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let stdin = std::io::stdin();
        match &self.command {
            PasswordCommand::Hash(args) => {
                let password = read_password(args.password.as_deref(), stdin.lock())?;
                let hasher = match BcryptHasher::with_cost(args.cost) {
                    Ok(h) => h,
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return Ok(EXIT_CONFIG);
                    }
                };
                Ok(hash_password(&hasher, &password))
            }
            PasswordCommand::Verify(args) => {
                let password = read_password(args.password.as_deref(), stdin.lock())?;
                Ok(verify_password(&BcryptHasher::new(), &password, &args.digest))
            }
        }
    }
}

/// Use `explicit` if given, otherwise the first line of `input` without its line ending
fn read_password<R: BufRead>(explicit: Option<&str>, mut input: R) -> anyhow::Result<String> {
    if let Some(password) = explicit {
        return Ok(password.to_string());
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn hash_password(hasher: &dyn PasswordHasher, password: &str) -> i32 {
    match hasher.hash(password) {
        Ok(digest) => {
            println!("{digest}");
            EXIT_OK
        }
        Err(e @ CredentialError::PasswordTooLong { .. }) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG
        }
        Err(e) => {
            tracing::error!(error = %e, "Hashing failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    }
}

fn verify_password(hasher: &dyn PasswordHasher, password: &str, digest: &str) -> i32 {
    match hasher.verify(password, digest) {
        Ok(()) => {
            println!("Password matches");
            EXIT_OK
        }
        Err(e) if e.is_mismatch() => {
            println!("Password does not match");
            EXIT_MISMATCH
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG
        }
    }
}
