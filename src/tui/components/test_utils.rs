//! Test utilities for TUI component tests.

/// Strips ANSI escape sequences from `text`.
///
/// Lets assertions look at what the user reads without the colour codes.
#[must_use]
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_escape = false;

    for ch in text.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            // A letter terminates the sequence.
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
