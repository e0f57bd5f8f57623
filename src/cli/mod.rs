//! CLI operation mode handlers.
//!
//! - [`search`]: One-shot search printing matching entries
//! - [`browse_tui`]: Interactive journal browser
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use reflexa::tui::JournalSession;
use reflexa::{
    EmotionCatalog, JournalIndex, ReflexaConfig, ReflexaError, load_catalog, load_entries,
};

pub mod browse_tui;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod test_utils;

/// Loads the catalog and journal named by `config`.
///
/// The built-in catalog is used when no catalog path is configured.
///
/// # Errors
///
/// Returns [`ReflexaError::Configuration`] when no journal path is set and
/// [`ReflexaError::Journal`] when a file cannot be read or parsed.
pub fn load_session(config: &ReflexaConfig) -> Result<JournalSession, ReflexaError> {
    let entries_path = config.require_entries_path()?;
    let catalog = match config.catalog_path() {
        Some(path) => load_catalog(path)?,
        None => EmotionCatalog::builtin(),
    };
    let entries = load_entries(entries_path, &catalog)?;

    Ok(JournalSession {
        index: JournalIndex::new(entries, config.query_options()),
        catalog: Arc::new(catalog),
        retention: config.retention_policy(),
    })
}
