//! Entry-query collaborator: the consumer of submitted criteria.

use crate::journal::JournalEntry;

use super::criteria::{FilterCriteria, QueryOptions};

/// Matches journal entries against submitted criteria.
pub trait EntryQuery {
    /// Returns entries satisfying `criteria`, newest first.
    fn query(&self, criteria: &FilterCriteria) -> Vec<&JournalEntry>;
}

/// In-memory journal searched by linear scan.
#[derive(Debug, Clone, Default)]
pub struct JournalIndex {
    /// Entries ordered newest first.
    entries: Vec<JournalEntry>,
    options: QueryOptions,
}

impl JournalIndex {
    /// Builds an index, ordering entries newest first.
    #[must_use]
    pub fn new(mut entries: Vec<JournalEntry>, options: QueryOptions) -> Self {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { entries, options }
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the journal has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpretation options in force.
    #[must_use]
    pub const fn options(&self) -> QueryOptions {
        self.options
    }

    /// Positions in [`entries`](Self::entries) matching `criteria`.
    #[must_use]
    pub fn matching_indices(&self, criteria: &FilterCriteria) -> Vec<usize> {
        if criteria.has_inverted_range() {
            tracing::debug!(policy = ?self.options.inverted_range, "query has an inverted date range");
        }
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| criteria.matches(entry, self.options))
            .map(|(index, _)| index)
            .collect()
    }
}

impl EntryQuery for JournalIndex {
    fn query(&self, criteria: &FilterCriteria) -> Vec<&JournalEntry> {
        self.matching_indices(criteria)
            .into_iter()
            .filter_map(|index| self.entries.get(index))
            .collect()
    }
}
