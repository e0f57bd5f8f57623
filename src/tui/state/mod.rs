//! State types for the journal TUI that sit outside the search form.
//!
//! The search form's own state lives in [`crate::search::FilterFormController`];
//! these types cover the list cursor and the text behind an open date picker.

mod date_input;
mod list_cursor;

pub use date_input::DateInput;
pub use list_cursor::ListCursor;
