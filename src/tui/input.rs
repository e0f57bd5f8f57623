//! Input handling for the TUI application.
//!
//! Key bindings depend on what has focus: the entry list, the search form,
//! or an open date picker. Unrecognised keys map to `None` and are ignored.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::KeyCode;

use super::messages::AppMsg;

/// Which part of the interface receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The journal entry list.
    EntryList,
    /// The search form, with no picker open.
    SearchForm,
    /// A date picker inside the search form.
    DatePicker,
}

/// Maps a key event to an application message for the given context.
#[must_use]
pub fn map_key_to_message_with_context(key: &KeyMsg, context: InputContext) -> Option<AppMsg> {
    match context {
        InputContext::EntryList => map_entry_list_key(key.key),
        InputContext::SearchForm => map_search_form_key(key.key),
        InputContext::DatePicker => map_date_picker_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_entry_list_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('/') => Some(AppMsg::OpenSearch),
        KeyCode::Char('x') => Some(AppMsg::ResetResults),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_search_form_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            Some(AppMsg::FocusNextEmotion)
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            Some(AppMsg::FocusPreviousEmotion)
        }
        KeyCode::Char(' ') => Some(AppMsg::ToggleFocusedEmotion),
        KeyCode::Char('b') => Some(AppMsg::ToggleBookmarked),
        KeyCode::Char('s') => Some(AppMsg::OpenStartPicker),
        KeyCode::Char('e') => Some(AppMsg::OpenEndPicker),
        KeyCode::Char('c') => Some(AppMsg::ClearFilters),
        KeyCode::Enter => Some(AppMsg::SubmitSearch),
        KeyCode::Esc => Some(AppMsg::DismissSearch),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_date_picker_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => Some(AppMsg::PickerInput(ch)),
        KeyCode::Backspace => Some(AppMsg::PickerBackspace),
        KeyCode::Enter => Some(AppMsg::PickerCommit),
        KeyCode::Delete => Some(AppMsg::PickerUnset),
        KeyCode::Esc => Some(AppMsg::PickerCancel),
        _ => None,
    }
}
