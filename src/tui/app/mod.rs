//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! journal browser. It owns the entry list, the applied search, and the
//! search form controller, and routes messages to specialised handlers.
//!
//! # Module Structure
//!
//! - `navigation`: Entry list cursor movement
//! - `search_handlers`: Search form operations and applying criteria
//! - `picker_handlers`: Date picker editing
//! - `lifecycle_handlers`: Quit, help, and resize
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use chrono::{NaiveDate, Utc};

use crate::journal::JournalEntry;
use crate::search::{FilterCriteria, FilterFormController, JournalIndex, PickerState};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::{EntryListComponent, SearchModalComponent};
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{DateInput, ListCursor};
use super::storage::JournalSession;

mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod picker_handlers;
mod rendering;
mod search_handlers;

/// Layout rows reserved for header, search bar, and status bar.
pub(crate) const CHROME_HEIGHT: usize = 3;
/// Minimum rows for the entry list.
pub(crate) const MIN_LIST_HEIGHT: usize = 1;

/// Main application model for the journal TUI.
pub struct JournalApp {
    /// All entries, newest first, with query options.
    index: JournalIndex,
    /// Cached indices of entries matching `applied`.
    filtered_indices: Vec<usize>,
    /// The last submitted search.
    applied: FilterCriteria,
    /// Search form state.
    pub(crate) form: FilterFormController,
    /// Whether the search form is showing.
    pub(crate) search_open: bool,
    /// Focused emotion and the first emotion shown in the form.
    emotion_cursor: ListCursor,
    /// Text of the open date picker.
    date_input: Option<DateInput>,
    /// Validation message for the open date picker.
    picker_error: Option<String>,
    /// Entry list cursor.
    cursor: ListCursor,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    entry_list: EntryListComponent,
    search_modal: SearchModalComponent,
    telemetry: Arc<dyn TelemetrySink>,
    /// Date a picker starts from when its bound is unset.
    today: NaiveDate,
}

impl fmt::Debug for JournalApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalApp")
            .field("entries", &self.index.len())
            .field("filtered", &self.filtered_indices.len())
            .field("applied", &self.applied)
            .field("search_open", &self.search_open)
            .field("picker", &self.form.picker())
            .finish_non_exhaustive()
    }
}

impl JournalApp {
    /// Creates an application showing every entry in `session`.
    #[must_use]
    pub fn new(session: JournalSession) -> Self {
        let JournalSession {
            index,
            catalog,
            retention,
        } = session;
        let filtered_indices: Vec<usize> = (0..index.len()).collect();
        let (width, height) = super::get_initial_terminal_size().unwrap_or((80, 24));
        let mut app = Self {
            index,
            filtered_indices,
            applied: FilterCriteria::unrestricted(),
            form: FilterFormController::new(catalog, retention),
            search_open: false,
            emotion_cursor: ListCursor::new(),
            date_input: None,
            picker_error: None,
            cursor: ListCursor::new(),
            width,
            height,
            show_help: false,
            entry_list: EntryListComponent::new(),
            search_modal: SearchModalComponent::new(),
            telemetry: Arc::new(NoopTelemetrySink),
            today: Utc::now().date_naive(),
        };
        let list_height = app.calculate_list_height();
        app.entry_list.set_visible_height(list_height);
        app
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Sets the date pickers start from when a bound is unset.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Returns the entries matching the applied search.
    #[must_use]
    pub fn filtered_entries(&self) -> Vec<&JournalEntry> {
        self.filtered_indices
            .iter()
            .filter_map(|&i| self.index.entries().get(i))
            .collect()
    }

    /// Returns the count of matching entries.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the entry under the cursor, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.filtered_indices
            .get(self.cursor.position)
            .and_then(|&i| self.index.entries().get(i))
    }

    /// Returns the last submitted search.
    #[must_use]
    pub const fn applied_criteria(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Returns the search form state.
    #[must_use]
    pub const fn form(&self) -> &FilterFormController {
        &self.form
    }

    /// Returns true while the search form is showing.
    #[must_use]
    pub const fn is_search_open(&self) -> bool {
        self.search_open
    }

    /// Returns the catalog index of the focused emotion.
    #[must_use]
    pub const fn focused_emotion(&self) -> usize {
        self.emotion_cursor.position
    }

    /// Returns the open picker's text, if a picker is open.
    #[must_use]
    pub fn picker_text(&self) -> Option<&str> {
        self.date_input.as_ref().map(DateInput::text)
    }

    /// Returns the open picker's validation message, if any.
    #[must_use]
    pub fn picker_error(&self) -> Option<&str> {
        self.picker_error.as_deref()
    }

    /// Returns the current input context for context-aware key mapping.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if !self.search_open {
            InputContext::EntryList
        } else if self.form.picker() == PickerState::Closed {
            InputContext::SearchForm
        } else {
            InputContext::DatePicker
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_search() {
            return self.handle_search_msg(msg);
        }
        if msg.is_picker() {
            return self.handle_picker_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Recomputes matches for `criteria` and makes it the applied search.
    pub(crate) fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.filtered_indices = self.index.matching_indices(&criteria);
        self.applied = criteria;
        self.cursor.clamp(self.filtered_indices.len());
        self.cursor.keep_visible(self.entry_list.visible_height());
    }

    /// Drops picker text once the form reports no picker open.
    pub(crate) fn sync_picker_input(&mut self) {
        if self.form.picker() == PickerState::Closed {
            self.date_input = None;
            self.picker_error = None;
        }
    }

    /// Rows the search form can give the emotion list right now.
    pub(crate) fn emotion_list_height(&self) -> usize {
        let picker_rows =
            SearchModalComponent::picker_rows(self.form.picker(), self.picker_error.is_some());
        SearchModalComponent::emotion_rows(self.calculate_list_height(), picker_rows)
    }

    /// Calculates the number of rows available to the entry list.
    pub(crate) fn calculate_list_height(&self) -> usize {
        (self.height as usize)
            .saturating_sub(CHROME_HEIGHT)
            .max(MIN_LIST_HEIGHT)
    }
}
