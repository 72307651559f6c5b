// Common Service - MongoDB, environment and credential seams for services
// Copyright (c) 2025 Common Service Contributors
// Licensed under the MIT License

use clap::Parser;
use common_service::cli::commands::{EXIT_CONFIG, EXIT_FATAL};
use common_service::cli::Cli;
use common_service::config::{DotenvEnvironment, EnvironmentSource, LoggingConfig};
use common_service::log_error_with_context;
use common_service::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let file_source;
    let source: &dyn EnvironmentSource = match &cli.env_file {
        Some(path) => {
            file_source = DotenvEnvironment::with_path(path.clone());
            &file_source
        }
        None => DotenvEnvironment::global(),
    };

    let logging_config = match LoggingConfig::from_env(source) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid logging configuration: {e}");
            process::exit(EXIT_CONFIG);
        }
    };
    let log_level = cli.log_level.as_deref().unwrap_or(&logging_config.level);
    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Common Service");

    let exit_code = match cli.execute(source).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors, so flush the file writer first
    drop(guard);
    process::exit(exit_code);
}
