//! Startup context storage for the journal TUI.
//!
//! bubbletea-rs constructs the model in a static `init()`, so the CLI parks
//! the loaded journal and settings here before starting the program.

use std::sync::{Arc, OnceLock};

use crate::journal::EmotionCatalog;
use crate::search::{JournalIndex, RetentionPolicy};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the journal session.
///
/// This is set before the TUI program starts and read by `JournalApp::init()`.
static INITIAL_SESSION: OnceLock<JournalSession> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the TUI needs to browse a journal.
#[derive(Debug, Clone)]
pub struct JournalSession {
    /// Entries and query options.
    pub index: JournalIndex,
    /// Emotions offered by the search form.
    pub catalog: Arc<EmotionCatalog>,
    /// What dismissing the search form does to its values.
    pub retention: RetentionPolicy,
}

/// Sets the journal session for the TUI application.
///
/// Returns `true` if the session was set, `false` if it was already set.
#[must_use]
pub fn set_initial_session(session: JournalSession) -> bool {
    INITIAL_SESSION.set(session).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// Returns `true` if the dimensions were set, `false` if they were already set.
#[must_use]
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Returns `true` if the sink was set, `false` if it was already set.
#[must_use]
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the stored session, or an empty journal if unset.
pub(crate) fn get_initial_session() -> JournalSession {
    INITIAL_SESSION.get().cloned().unwrap_or_else(|| JournalSession {
        index: JournalIndex::default(),
        catalog: Arc::new(EmotionCatalog::builtin()),
        retention: RetentionPolicy::default(),
    })
}

/// Gets the stored terminal size, if one was recorded.
pub(crate) fn get_initial_terminal_size() -> Option<(u16, u16)> {
    INITIAL_TERMINAL_SIZE.get().copied()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}
