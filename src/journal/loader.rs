//! Read-only loading of journal and catalog files.
//!
//! Both files are JSON arrays. Nothing here writes back: the journal file is
//! an interchange input, and its owner is whatever produced it.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::de::DeserializeOwned;

use super::emotion::{EmotionCatalog, EmotionTag};
use super::entry::JournalEntry;
use super::error::JournalError;

/// Loads journal entries from a JSON array file.
///
/// Entries tagged with emotions unknown to `catalog` are kept; a warning is
/// logged for each unknown id.
///
/// # Errors
///
/// Returns [`JournalError::Io`] when the file cannot be read and
/// [`JournalError::Parse`] when it is not a valid entry array.
pub fn load_entries(
    path: &Utf8Path,
    catalog: &EmotionCatalog,
) -> Result<Vec<JournalEntry>, JournalError> {
    let entries: Vec<JournalEntry> = read_json(path, "journal")?;

    for entry in &entries {
        for emotion in entry.emotions.iter().filter(|id| !catalog.contains(id)) {
            tracing::warn!(
                entry = %entry.id,
                emotion = %emotion,
                "journal entry references an emotion missing from the catalog"
            );
        }
    }

    tracing::info!(count = entries.len(), path = %path, "loaded journal entries");
    Ok(entries)
}

/// Loads an emotion catalog from a JSON array of tags.
///
/// # Errors
///
/// Returns [`JournalError::Io`] or [`JournalError::Parse`] as for
/// [`load_entries`], and [`JournalError::DuplicateEmotion`] when ids repeat.
pub fn load_catalog(path: &Utf8Path) -> Result<EmotionCatalog, JournalError> {
    let tags: Vec<EmotionTag> = read_json(path, "catalog")?;
    let catalog = EmotionCatalog::new(tags)?;
    tracing::info!(count = catalog.len(), path = %path, "loaded emotion catalog");
    Ok(catalog)
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path, label: &str) -> Result<T, JournalError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| JournalError::Io {
        message: format!("invalid {label} path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        JournalError::Io {
            message: format!("failed to open {label} directory '{parent}': {error}"),
        }
    })?;
    let content = dir
        .read_to_string(file_name)
        .map_err(|error| JournalError::Io {
            message: format!("failed to read {label} file '{path}': {error}"),
        })?;

    serde_json::from_str(&content).map_err(|error| JournalError::Parse {
        message: format!("failed to parse {label} file '{path}': {error}"),
    })
}
