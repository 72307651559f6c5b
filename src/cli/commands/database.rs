//! `db` command: connectivity check and index creation

use super::{EXIT_CONFIG, EXIT_DATABASE, EXIT_OK};
use crate::adapters::database::DatabaseLifecycle;
use crate::adapters::mongodb::{IndexSpec, MongoDatabase};
use crate::config::{DatabaseConfig, EnvironmentSource};
use anyhow::Context;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Arguments for the db command
#[derive(Args, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

/// Database operations, configured through the `MONGODB_*` variables
#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Connect and ping the server
    Ping,

    /// Create the indexes listed in a JSON file, in order
    CreateIndexes(CreateIndexesArgs),
}

#[derive(Args, Debug)]
pub struct CreateIndexesArgs {
    /// JSON array of `{"key": {...}, "options": {...}}` objects
    #[arg(long)]
    pub file: PathBuf,
}

impl DbArgs {
    /// Execute the db command
    pub async fn execute(&self, source: &dyn EnvironmentSource) -> anyhow::Result<i32> {
        let config = match DatabaseConfig::from_env(source) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Invalid database configuration");
                eprintln!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let specs = match &self.command {
            DbCommand::Ping => Vec::new(),
            DbCommand::CreateIndexes(args) => match load_index_specs(&args.file) {
                Ok(specs) => specs,
                Err(e) => {
                    eprintln!("❌ Failed to read index file");
                    eprintln!("   Error: {e:#}");
                    return Ok(EXIT_CONFIG);
                }
            },
        };

        let mut db = MongoDatabase::from_config(&config);
        println!("🔌 Connecting to {}", db.connection_string_safe());

        Ok(run_against(&mut db, &specs).await)
    }
}

/// Parse an index specification file
fn load_index_specs(path: &Path) -> anyhow::Result<Vec<IndexSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let specs = serde_json::from_str(&content)
        .with_context(|| format!("Invalid index specification in {}", path.display()))?;
    Ok(specs)
}

/// Connect, apply `specs` if any, and always disconnect
async fn run_against<L>(db: &mut L, specs: &[IndexSpec]) -> i32
where
    L: DatabaseLifecycle + ?Sized,
{
    if let Err(e) = db.connect().await {
        tracing::error!(error = %e, "Connection failed");
        eprintln!("❌ {e}");
        return EXIT_DATABASE;
    }
    println!("✅ Connected");

    let outcome = if specs.is_empty() {
        Ok(())
    } else {
        db.create_indexes(specs).await
    };

    if let Err(e) = db.disconnect().await {
        tracing::warn!(error = %e, "Disconnect failed");
    }

    match outcome {
        Ok(()) => {
            if !specs.is_empty() {
                println!("✅ Created {} index(es)", specs.len());
            }
            EXIT_OK
        }
        Err(e) => {
            eprintln!("❌ {e}");
            EXIT_DATABASE
        }
    }
}
