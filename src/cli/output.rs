//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use reflexa::{EmotionCatalog, FilterCriteria, JournalEntry, ReflexaError};

/// Writes the search summary and one line per matching entry.
///
/// # Errors
///
/// Returns [`ReflexaError::Io`] when writing fails.
pub fn write_search_results<W: Write>(
    writer: &mut W,
    criteria: &FilterCriteria,
    matches: &[&JournalEntry],
    total: usize,
    catalog: &EmotionCatalog,
) -> Result<(), ReflexaError> {
    writeln!(
        writer,
        "Search: {} ({}/{total})",
        criteria.label(),
        matches.len()
    )
    .map_err(|e| io_error(&e))?;

    if matches.is_empty() {
        writeln!(writer, "No journal entries match.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for entry in matches {
        writeln!(writer, "{}", format_entry_line(entry, catalog)).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Formats an entry as `date marker title [labels] (id)`.
#[must_use]
pub fn format_entry_line(entry: &JournalEntry, catalog: &EmotionCatalog) -> String {
    let marker = if entry.bookmarked { '*' } else { ' ' };
    let labels: Vec<&str> = entry
        .emotions
        .iter()
        .map(|id| catalog.label_for(id))
        .collect();
    let emotions = if labels.is_empty() {
        String::new()
    } else {
        format!(" [{}]", labels.join(", "))
    };

    format!(
        "{} {marker} {}{emotions} ({})",
        entry.date(),
        entry.title,
        entry.id
    )
}

/// Converts an I/O error to a [`ReflexaError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ReflexaError {
    ReflexaError::Io {
        message: error.to_string(),
    }
}
