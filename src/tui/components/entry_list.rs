//! Entry list component for displaying filtered journal entries.
//!
//! This component renders a scrollable list of entries with cursor
//! highlighting, the entry date, a bookmark marker, and emotion labels.

use crate::journal::{EmotionCatalog, JournalEntry};

/// Default visible height for the entry list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Maximum title characters shown per row.
const TITLE_WIDTH: usize = 40;

/// Context for rendering the entry list view.
///
/// Bundles the data needed to render a filtered list of entries without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct EntryListViewContext<'a> {
    /// Full slice of all entries, newest first.
    pub entries: &'a [JournalEntry],
    /// Indices of entries matching the applied search.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of lines scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Catalog used to label emotions.
    pub catalog: &'a EmotionCatalog,
}

/// Component for displaying a list of journal entries.
#[derive(Debug, Clone)]
pub struct EntryListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for EntryListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryListComponent {
    /// Creates a new entry list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the entry list as a string.
    ///
    /// Only rows inside the visible window are rendered.
    #[must_use]
    pub fn view(&self, ctx: &EntryListViewContext<'_>) -> String {
        if ctx.filtered_indices.is_empty() {
            return "  No journal entries match the current search.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (display_index, &entry_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let Some(entry) = ctx.entries.get(entry_index) else {
                continue;
            };
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            output.push_str(&format_entry_line(entry, prefix, ctx.catalog));
            output.push('\n');
        }

        output
    }
}

/// Formats a single entry row.
fn format_entry_line(entry: &JournalEntry, prefix: &str, catalog: &EmotionCatalog) -> String {
    let marker = if entry.bookmarked { "*" } else { " " };
    let date = entry.date().format("%Y-%m-%d");
    let title = truncate_title(&entry.title, TITLE_WIDTH);
    let labels: Vec<&str> = entry
        .emotions
        .iter()
        .map(|id| catalog.label_for(id))
        .collect();

    if labels.is_empty() {
        format!("{prefix} {date} {marker} {title}")
    } else {
        format!("{prefix} {date} {marker} {title} [{}]", labels.join(", "))
    }
}

/// Truncates a title to `max_chars`, adding an ellipsis when shortened.
fn truncate_title(title: &str, max_chars: usize) -> String {
    let first_line = title.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= max_chars {
        return first_line.to_owned();
    }
    let kept: String = first_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{kept}...")
}
