//! Search form message handlers for the journal TUI.
//!
//! The handlers translate form messages into [`FilterFormController`]
//! operations. Submit and dismiss signals are collected by [`FormSignals`]
//! and then applied to the app, so the controller never borrows the app.
//!
//! [`FilterFormController`]: crate::search::FilterFormController

use bubbletea_rs::Cmd;

use super::JournalApp;
use crate::search::{FilterCriteria, SearchListener};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::DateInput;

/// Signals emitted by the form during one submit or dismiss.
#[derive(Debug, Default)]
struct FormSignals {
    submitted: Option<FilterCriteria>,
    closed: bool,
}

impl SearchListener for FormSignals {
    fn on_search(&mut self, criteria: FilterCriteria) {
        self.submitted = Some(criteria);
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}

impl JournalApp {
    /// Dispatches search form messages to their handlers.
    pub(super) fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSearch => self.handle_open_search(),
            AppMsg::ResetResults => self.apply_criteria(FilterCriteria::unrestricted()),
            _ if !self.search_open => {}
            AppMsg::FocusNextEmotion => self.move_emotion_focus(true),
            AppMsg::FocusPreviousEmotion => self.move_emotion_focus(false),
            AppMsg::ToggleFocusedEmotion => self.handle_toggle_focused_emotion(),
            AppMsg::ToggleBookmarked => self.form.toggle_bookmarked(),
            AppMsg::OpenStartPicker => {
                self.form.open_start_picker();
                self.start_picker_input(self.form.start_date());
            }
            AppMsg::OpenEndPicker => {
                self.form.open_end_picker();
                self.start_picker_input(self.form.end_date());
            }
            AppMsg::ClearFilters => {
                self.form.clear();
                self.sync_picker_input();
            }
            AppMsg::SubmitSearch => self.handle_submit_search(),
            AppMsg::DismissSearch => self.handle_dismiss_search(),
            _ => debug_assert!(false, "non-search message routed to handle_search_msg"),
        }
        None
    }

    fn handle_open_search(&mut self) {
        self.search_open = true;
        self.emotion_cursor.clamp(self.form.catalog().len());
        self.emotion_cursor.keep_visible(self.emotion_list_height());
    }

    fn move_emotion_focus(&mut self, forward: bool) {
        if forward {
            let last = self.form.catalog().len().saturating_sub(1);
            self.emotion_cursor.down(1, last);
        } else {
            self.emotion_cursor.up(1);
        }
        self.emotion_cursor.keep_visible(self.emotion_list_height());
    }

    fn handle_toggle_focused_emotion(&mut self) {
        let Some(id) = self
            .form
            .catalog()
            .at(self.emotion_cursor.position)
            .map(|tag| tag.id.clone())
        else {
            return;
        };
        self.form.toggle_emotion(&id);
    }

    fn start_picker_input(&mut self, current: Option<chrono::NaiveDate>) {
        self.date_input = Some(DateInput::new(current.unwrap_or(self.today)));
        self.picker_error = None;
    }

    fn handle_submit_search(&mut self) {
        let mut signals = FormSignals::default();
        self.form.submit(&mut signals);
        self.apply_signals(signals);
    }

    fn handle_dismiss_search(&mut self) {
        let mut signals = FormSignals::default();
        self.form.dismiss(&mut signals);
        self.telemetry.record(TelemetryEvent::SearchDismissed);
        self.apply_signals(signals);
    }

    fn apply_signals(&mut self, signals: FormSignals) {
        if let Some(criteria) = signals.submitted {
            let event = TelemetryEvent::SearchSubmitted {
                emotion_count: criteria.selected_emotions().len(),
                has_date_range: criteria.start_date().is_some() || criteria.end_date().is_some(),
                inverted_range: criteria.has_inverted_range(),
                bookmarked: criteria.bookmarked(),
                matched: self.index.matching_indices(&criteria).len(),
            };
            self.apply_criteria(criteria);
            self.telemetry.record(event);
        }
        if signals.closed {
            self.search_open = false;
        }
        self.sync_picker_input();
    }
}
