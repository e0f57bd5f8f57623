//! Journal entry model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::emotion::EmotionId;
use super::error::JournalError;

/// A single journal entry as read from the journal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Stable entry identifier.
    pub id: String,
    /// Short title shown in listings.
    pub title: String,
    /// Free-form body text.
    #[serde(default)]
    pub body: String,
    /// Emotions the author tagged this entry with.
    #[serde(default)]
    pub emotions: Vec<EmotionId>,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
    /// Whether the author bookmarked the entry.
    #[serde(default)]
    pub bookmarked: bool,
}

impl JournalEntry {
    /// Calendar date the entry belongs to (UTC).
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Returns true if the entry is tagged with `id`.
    #[must_use]
    pub fn has_emotion(&self, id: &EmotionId) -> bool {
        self.emotions.contains(id)
    }
}

/// Parses a `YYYY-MM-DD` date as typed by the user.
///
/// # Errors
///
/// Returns [`JournalError::InvalidDate`] when the input is not a valid
/// calendar date in that format.
pub fn parse_date(value: &str) -> Result<NaiveDate, JournalError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| JournalError::InvalidDate {
        value: trimmed.to_owned(),
    })
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Builders for journal entries used across unit and behavioural tests.

    use chrono::{NaiveDate, TimeZone, Utc};

    use super::JournalEntry;
    use crate::journal::EmotionId;

    /// Builds an entry written at noon UTC on the given day.
    ///
    /// # Panics
    ///
    /// Panics if the date components are not a valid calendar date.
    #[must_use]
    #[expect(clippy::expect_used, reason = "test fixture with literal dates")]
    pub fn entry_on(id: &str, year: i32, month: u32, day: u32, emotions: &[&str]) -> JournalEntry {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
        let created_at = Utc.from_utc_datetime(
            &date
                .and_hms_opt(12, 0, 0)
                .expect("noon is a valid time of day"),
        );
        JournalEntry {
            id: id.to_owned(),
            title: format!("Entry {id}"),
            body: String::new(),
            emotions: emotions.iter().map(|e| EmotionId::from(*e)).collect(),
            created_at,
            bookmarked: false,
        }
    }

    /// Same as [`entry_on`] but bookmarked.
    #[must_use]
    pub fn bookmarked_entry_on(
        id: &str,
        year: i32,
        month: u32,
        day: u32,
        emotions: &[&str],
    ) -> JournalEntry {
        JournalEntry {
            bookmarked: true,
            ..entry_on(id, year, month, day, emotions)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::test_support::entry_on;
    use super::*;

    #[rstest]
    #[case("2024-01-01", NaiveDate::from_ymd_opt(2024, 1, 1))]
    #[case(" 2024-02-29 ", NaiveDate::from_ymd_opt(2024, 2, 29))]
    fn parse_date_accepts_iso_dates(#[case] input: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(input).ok(), expected);
    }

    #[rstest]
    #[case("2023-02-29")]
    #[case("01/02/2024")]
    #[case("")]
    fn parse_date_rejects_invalid_input(#[case] input: &str) {
        assert!(matches!(
            parse_date(input),
            Err(JournalError::InvalidDate { .. })
        ));
    }

    #[test]
    fn entry_date_uses_utc_calendar_day() {
        let entry = entry_on("a", 2024, 3, 15, &["joy"]);
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"));
        assert!(entry.has_emotion(&EmotionId::from("joy")));
        assert!(!entry.has_emotion(&EmotionId::from("sad")));
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"id":"1","title":"Morning","created_at":"2024-01-01T08:00:00Z"}"#;
        let entry: JournalEntry = serde_json::from_str(json).expect("entry should parse");

        assert!(entry.emotions.is_empty());
        assert!(!entry.bookmarked);
        assert!(entry.body.is_empty());
    }
}
