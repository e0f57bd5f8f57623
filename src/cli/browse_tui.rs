//! TUI mode for browsing and searching the journal.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reflexa::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use reflexa::tui::{JournalApp, set_initial_session, set_initial_terminal_size, set_telemetry_sink};
use reflexa::{ReflexaConfig, ReflexaError};

/// Runs the interactive journal browser.
///
/// # Errors
///
/// Returns an error if:
/// - The journal path is missing or a journal file cannot be loaded
/// - The TUI fails to initialise
pub async fn run(config: &ReflexaConfig) -> Result<(), ReflexaError> {
    let session = super::load_session(config)?;
    tracing::info!(entries = session.index.len(), "starting journal browser");

    // Store startup data for Model::init() to retrieve. If already set, the
    // existing values remain.
    if !set_initial_session(session) {
        tracing::debug!("journal session already stored; keeping it");
    }
    if let Ok((width, height)) = crossterm::terminal::size()
        && !set_initial_terminal_size(width, height)
    {
        tracing::debug!("terminal size already stored; keeping it");
    }
    if !set_telemetry_sink(telemetry_sink(config)) {
        tracing::debug!("telemetry sink already stored; keeping it");
    }

    run_tui().await.map_err(|error| ReflexaError::Tui {
        message: error.to_string(),
    })
}

fn telemetry_sink(config: &ReflexaConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Runs the bubbletea-rs program with the `JournalApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // JournalApp::init() will retrieve data from module-level storage.
    let program = Program::<JournalApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
