//! Text buffer behind an open date picker.
//!
//! The picker edits a `YYYY-MM-DD` string. Only digits and `-` are accepted
//! and the buffer never grows past the width of a full date.

use chrono::NaiveDate;

use crate::journal::{JournalError, parse_date};

const DATE_WIDTH: usize = 10;

/// Editable date text for the open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInput {
    buffer: String,
}

impl DateInput {
    /// Starts editing from `initial`.
    #[must_use]
    pub fn new(initial: NaiveDate) -> Self {
        Self {
            buffer: initial.format("%Y-%m-%d").to_string(),
        }
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Appends `ch` if it is a digit or `-` and there is room.
    pub fn push(&mut self, ch: char) {
        if (ch.is_ascii_digit() || ch == '-') && self.buffer.len() < DATE_WIDTH {
            self.buffer.push(ch);
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Parses the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::InvalidDate`] when the text is not a date.
    pub fn parse(&self) -> Result<NaiveDate, JournalError> {
        parse_date(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn starts_from_initial_date() {
        let input = DateInput::new(date(2024, 1, 9));
        assert_eq!(input.text(), "2024-01-09");
        assert_eq!(input.parse(), Ok(date(2024, 1, 9)));
    }

    #[test]
    fn editing_replaces_the_day() {
        let mut input = DateInput::new(date(2024, 1, 9));
        input.backspace();
        input.backspace();
        input.push('2');
        input.push('8');

        assert_eq!(input.parse(), Ok(date(2024, 1, 28)));
    }

    #[test]
    fn rejects_non_date_characters_and_overflow() {
        let mut input = DateInput::new(date(2024, 1, 9));
        input.push('7');
        input.backspace();
        input.backspace();
        input.push('x');
        input.push(' ');

        assert_eq!(input.text(), "2024-01-");
        assert!(input.parse().is_err());
    }
}
