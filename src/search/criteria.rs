//! Filter criteria produced by the search form and how entries match them.
//!
//! [`FilterCriteria`] is a plain value: the form builds one on submit and
//! hands it over. Interpreting it, including what an inverted date range
//! means, is the consumer's job and is parameterised by [`QueryOptions`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::journal::{EmotionId, JournalEntry};

/// Immutable snapshot of the search form's filter values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    selected_emotions: BTreeSet<EmotionId>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    bookmarked: bool,
}

impl FilterCriteria {
    /// Builds criteria from their parts. Duplicate emotion ids collapse.
    #[must_use]
    pub fn new(
        selected_emotions: impl IntoIterator<Item = EmotionId>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        bookmarked: bool,
    ) -> Self {
        Self {
            selected_emotions: selected_emotions.into_iter().collect(),
            start_date,
            end_date,
            bookmarked,
        }
    }

    /// Criteria that match every entry.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Selected emotion ids.
    #[must_use]
    pub const fn selected_emotions(&self) -> &BTreeSet<EmotionId> {
        &self.selected_emotions
    }

    /// Inclusive lower date bound.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Inclusive upper date bound.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Whether only bookmarked entries are wanted.
    #[must_use]
    pub const fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Returns true if both bounds are set and start falls after end.
    #[must_use]
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(start), Some(end)) if start > end)
    }

    /// Returns true if these criteria place no restriction on entries.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.selected_emotions.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && !self.bookmarked
    }

    /// Returns a human-readable summary for status lines.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_unrestricted() {
            return "All".to_owned();
        }

        let mut parts = Vec::new();
        if !self.selected_emotions.is_empty() {
            let ids: Vec<&str> = self.selected_emotions.iter().map(EmotionId::as_str).collect();
            parts.push(format!("Emotions: {}", ids.join(", ")));
        }
        if self.start_date.is_some() || self.end_date.is_some() {
            parts.push(format!(
                "Dates: {}..{}",
                format_bound(self.start_date),
                format_bound(self.end_date)
            ));
        }
        if self.bookmarked {
            parts.push("Bookmarked".to_owned());
        }
        parts.join(" | ")
    }

    /// Returns true if `entry` satisfies every criterion under `options`.
    #[must_use]
    pub fn matches(&self, entry: &JournalEntry, options: QueryOptions) -> bool {
        if self.bookmarked && !entry.bookmarked {
            return false;
        }
        if !self.matches_emotions(entry, options.emotion_match) {
            return false;
        }
        self.date_bounds(options.inverted_range)
            .is_some_and(|bounds| bounds.contains(entry.date()))
    }

    fn matches_emotions(&self, entry: &JournalEntry, mode: EmotionMatch) -> bool {
        if self.selected_emotions.is_empty() {
            return true;
        }
        match mode {
            EmotionMatch::Any => self.selected_emotions.iter().any(|id| entry.has_emotion(id)),
            EmotionMatch::All => self.selected_emotions.iter().all(|id| entry.has_emotion(id)),
        }
    }

    /// Resolves the date bounds under `policy`. `None` means nothing matches.
    #[must_use]
    pub fn date_bounds(&self, policy: InvertedRangePolicy) -> Option<DateBounds> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start > end => match policy {
                InvertedRangePolicy::Empty => None,
                InvertedRangePolicy::Swap => Some(DateBounds {
                    start: Some(end),
                    end: Some(start),
                }),
            },
            (start, end) => Some(DateBounds { start, end }),
        }
    }
}

fn format_bound(bound: Option<NaiveDate>) -> String {
    bound.map_or_else(|| "any".to_owned(), |date| date.format("%Y-%m-%d").to_string())
}

/// Inclusive date bounds; an absent side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest matching date.
    pub start: Option<NaiveDate>,
    /// Latest matching date.
    pub end: Option<NaiveDate>,
}

impl DateBounds {
    /// Returns true if `date` lies within the bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// How the consumer treats a start date that falls after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvertedRangePolicy {
    /// The range is empty, so nothing matches.
    #[default]
    Empty,
    /// The bounds are swapped before matching.
    Swap,
}

/// How a multi-emotion selection matches an entry's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmotionMatch {
    /// The entry carries at least one selected emotion.
    #[default]
    Any,
    /// The entry carries every selected emotion.
    All,
}

/// Consumer-side interpretation choices for [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    /// Inverted date range handling.
    pub inverted_range: InvertedRangePolicy,
    /// Multi-emotion matching mode.
    pub emotion_match: EmotionMatch,
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::journal::test_support::{bookmarked_entry_on, entry_on};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn emotions(ids: &[&str]) -> Vec<EmotionId> {
        ids.iter().map(|id| EmotionId::from(*id)).collect()
    }

    #[fixture]
    fn mixed_entry() -> JournalEntry {
        entry_on("1", 2024, 3, 10, &["joy", "calm"])
    }

    #[test]
    fn duplicate_emotions_collapse() {
        let criteria = FilterCriteria::new(emotions(&["joy", "joy", "calm"]), None, None, false);
        assert_eq!(criteria.selected_emotions().len(), 2);
    }

    #[test]
    fn unrestricted_matches_everything() {
        let criteria = FilterCriteria::unrestricted();
        assert!(criteria.is_unrestricted());
        assert!(criteria.matches(&entry_on("1", 1999, 12, 31, &[]), QueryOptions::default()));
    }

    #[rstest]
    #[case::any_one_shared(EmotionMatch::Any, &["joy", "sad"], true)]
    #[case::any_none_shared(EmotionMatch::Any, &["sad"], false)]
    #[case::all_subset(EmotionMatch::All, &["joy", "calm"], true)]
    #[case::all_missing_one(EmotionMatch::All, &["joy", "sad"], false)]
    fn emotion_matching_modes(
        mixed_entry: JournalEntry,
        #[case] mode: EmotionMatch,
        #[case] selected: &[&str],
        #[case] expected: bool,
    ) {
        let criteria = FilterCriteria::new(emotions(selected), None, None, false);
        let options = QueryOptions {
            emotion_match: mode,
            ..QueryOptions::default()
        };
        assert_eq!(criteria.matches(&mixed_entry, options), expected);
    }

    #[rstest]
    #[case::on_start(date(2024, 3, 10), date(2024, 3, 20), true)]
    #[case::on_end(date(2024, 3, 1), date(2024, 3, 10), true)]
    #[case::before_start(date(2024, 3, 11), date(2024, 3, 20), false)]
    #[case::after_end(date(2024, 3, 1), date(2024, 3, 9), false)]
    fn date_bounds_are_inclusive(
        mixed_entry: JournalEntry,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] expected: bool,
    ) {
        let criteria = FilterCriteria::new(Vec::new(), Some(start), Some(end), false);
        assert_eq!(criteria.matches(&mixed_entry, QueryOptions::default()), expected);
    }

    #[rstest]
    fn open_ended_ranges_are_unbounded(mixed_entry: JournalEntry) {
        let from_only = FilterCriteria::new(Vec::new(), Some(date(2024, 1, 1)), None, false);
        let to_only = FilterCriteria::new(Vec::new(), None, Some(date(2024, 12, 31)), false);

        assert!(from_only.matches(&mixed_entry, QueryOptions::default()));
        assert!(to_only.matches(&mixed_entry, QueryOptions::default()));
    }

    #[rstest]
    #[case::empty_policy(InvertedRangePolicy::Empty, false)]
    #[case::swap_policy(InvertedRangePolicy::Swap, true)]
    fn inverted_range_follows_policy(
        mixed_entry: JournalEntry,
        #[case] policy: InvertedRangePolicy,
        #[case] expected: bool,
    ) {
        let criteria =
            FilterCriteria::new(Vec::new(), Some(date(2024, 6, 1)), Some(date(2024, 1, 1)), false);
        let options = QueryOptions {
            inverted_range: policy,
            ..QueryOptions::default()
        };

        assert!(criteria.has_inverted_range());
        assert_eq!(criteria.matches(&mixed_entry, options), expected);
    }

    #[test]
    fn bookmark_flag_restricts_to_bookmarked_entries() {
        let criteria = FilterCriteria::new(Vec::new(), None, None, true);
        let plain = entry_on("1", 2024, 1, 1, &[]);
        let marked = bookmarked_entry_on("2", 2024, 1, 1, &[]);

        assert!(!criteria.matches(&plain, QueryOptions::default()));
        assert!(criteria.matches(&marked, QueryOptions::default()));
    }

    #[test]
    fn label_summarises_each_criterion() {
        let criteria = FilterCriteria::new(
            emotions(&["joy", "calm"]),
            Some(date(2024, 1, 1)),
            None,
            true,
        );
        assert_eq!(
            criteria.label(),
            "Emotions: calm, joy | Dates: 2024-01-01..any | Bookmarked"
        );
        assert_eq!(FilterCriteria::unrestricted().label(), "All");
    }
}
