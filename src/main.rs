//! Reflexa CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reflexa::{OperationMode, ReflexaConfig, ReflexaError};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "reflexa exited with an error");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReflexaError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Search => cli::search::run(&config),
        OperationMode::BrowseTui => cli::browse_tui::run(&config).await,
    }
}

/// Installs a stderr log subscriber filtered by `RUST_LOG`.
///
/// Only warnings are shown by default so log lines do not interleave with
/// search output or the terminal UI.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReflexaError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReflexaConfig, ReflexaError> {
    ReflexaConfig::load().map_err(|error| ReflexaError::Configuration {
        message: error.to_string(),
    })
}
