//! Date picker handlers for the search form.
//!
//! A picker edits text; only a successful commit changes the form's bound.
//! Invalid text keeps the picker open with a validation message.

use bubbletea_rs::Cmd;
use chrono::NaiveDate;

use super::JournalApp;
use crate::search::PickerState;
use crate::tui::messages::AppMsg;

impl JournalApp {
    /// Dispatches date picker messages to their handlers.
    pub(super) fn handle_picker_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if !self.search_open || self.form.picker() == PickerState::Closed {
            return None;
        }

        match msg {
            AppMsg::PickerInput(ch) => {
                if let Some(input) = self.date_input.as_mut() {
                    input.push(*ch);
                }
                self.picker_error = None;
            }
            AppMsg::PickerBackspace => {
                if let Some(input) = self.date_input.as_mut() {
                    input.backspace();
                }
                self.picker_error = None;
            }
            AppMsg::PickerCommit => self.handle_picker_commit(),
            AppMsg::PickerUnset => self.commit_picker_date(None),
            AppMsg::PickerCancel => self.form.close_picker(),
            _ => debug_assert!(false, "non-picker message routed to handle_picker_msg"),
        }
        self.sync_picker_input();
        None
    }

    fn handle_picker_commit(&mut self) {
        let Some(parsed) = self.date_input.as_ref().map(crate::tui::state::DateInput::parse)
        else {
            return;
        };
        match parsed {
            Ok(date) => self.commit_picker_date(Some(date)),
            Err(error) => self.picker_error = Some(error.to_string()),
        }
    }

    fn commit_picker_date(&mut self, date: Option<NaiveDate>) {
        match self.form.picker() {
            PickerState::StartOpen => self.form.set_start_date(date),
            PickerState::EndOpen => self.form.set_end_date(date),
            PickerState::Closed => {}
        }
    }
}
