//! Search form state and its transitions.
//!
//! The controller owns the filter values the user is editing and which date
//! picker, if any, is open. Rendering layers observe it through the read
//! accessors and drive it through the transition methods; none of them can
//! fail.

use std::sync::Arc;

use chrono::NaiveDate;

use super::criteria::FilterCriteria;
use super::listener::SearchListener;
use crate::journal::{EmotionCatalog, EmotionId};

/// Which date picker is open. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    /// No picker is open.
    #[default]
    Closed,
    /// The start-date picker is open.
    StartOpen,
    /// The end-date picker is open.
    EndOpen,
}

/// What happens to filter values when the form is dismissed unsubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Values survive dismissal and reappear when the form reopens.
    #[default]
    Retain,
    /// Values are cleared when the form is dismissed without submitting.
    DiscardOnClose,
}

/// Mutable state behind the journal search form.
#[derive(Debug, Clone)]
pub struct FilterFormController {
    catalog: Arc<EmotionCatalog>,
    retention: RetentionPolicy,
    /// Selected ids in the order the user picked them.
    selected: Vec<EmotionId>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    bookmarked: bool,
    picker: PickerState,
}

impl FilterFormController {
    /// Creates an empty form over `catalog`.
    #[must_use]
    pub const fn new(catalog: Arc<EmotionCatalog>, retention: RetentionPolicy) -> Self {
        Self {
            catalog,
            retention,
            selected: Vec::new(),
            start_date: None,
            end_date: None,
            bookmarked: false,
            picker: PickerState::Closed,
        }
    }

    /// The catalog the form offers emotions from.
    #[must_use]
    pub fn catalog(&self) -> &EmotionCatalog {
        &self.catalog
    }

    /// The dismissal policy in force.
    #[must_use]
    pub const fn retention(&self) -> RetentionPolicy {
        self.retention
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn selected_emotions(&self) -> &[EmotionId] {
        &self.selected
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &EmotionId) -> bool {
        self.selected.contains(id)
    }

    /// Current start bound.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Current end bound.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Current bookmark flag.
    #[must_use]
    pub const fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Current picker visibility.
    #[must_use]
    pub const fn picker(&self) -> PickerState {
        self.picker
    }

    /// Returns true if no filter value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && !self.bookmarked
    }

    /// Snapshot of the current filter values.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.selected.iter().cloned(),
            self.start_date,
            self.end_date,
            self.bookmarked,
        )
    }

    /// Selects `id` if unselected, otherwise deselects it.
    ///
    /// The id is not checked against the catalog.
    pub fn toggle_emotion(&mut self, id: &EmotionId) {
        if let Some(index) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(index);
            tracing::debug!(emotion = %id, "deselected emotion");
        } else {
            self.selected.push(id.clone());
            tracing::debug!(emotion = %id, "selected emotion");
        }
    }

    /// Replaces the start bound and closes the picker.
    pub const fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        self.picker = PickerState::Closed;
    }

    /// Replaces the end bound and closes the picker.
    pub const fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
        self.picker = PickerState::Closed;
    }

    /// Replaces the bookmark flag.
    pub const fn set_bookmarked(&mut self, bookmarked: bool) {
        self.bookmarked = bookmarked;
    }

    /// Flips the bookmark flag.
    pub const fn toggle_bookmarked(&mut self) {
        self.bookmarked = !self.bookmarked;
    }

    /// Opens the start picker, closing the end picker.
    pub const fn open_start_picker(&mut self) {
        self.picker = PickerState::StartOpen;
    }

    /// Opens the end picker, closing the start picker.
    pub const fn open_end_picker(&mut self) {
        self.picker = PickerState::EndOpen;
    }

    /// Closes whichever picker is open.
    pub const fn close_picker(&mut self) {
        self.picker = PickerState::Closed;
    }

    /// Resets every filter value and closes any open picker.
    ///
    /// The form itself stays open.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.start_date = None;
        self.end_date = None;
        self.bookmarked = false;
        self.picker = PickerState::Closed;
        tracing::debug!("cleared search filters");
    }

    /// Emits the current criteria and asks for the form to close.
    ///
    /// `on_search` runs exactly once, before `on_close`. Filter values are
    /// kept so reopening the form shows the last submitted search.
    pub fn submit(&mut self, listener: &mut impl SearchListener) {
        let criteria = self.criteria();
        self.picker = PickerState::Closed;
        tracing::info!(
            emotions = criteria.selected_emotions().len(),
            start = ?criteria.start_date(),
            end = ?criteria.end_date(),
            bookmarked = criteria.bookmarked(),
            inverted = criteria.has_inverted_range(),
            "submitting journal search"
        );
        listener.on_search(criteria);
        listener.on_close();
    }

    /// Closes the form without searching.
    ///
    /// Nothing is emitted to `on_search`. Under
    /// [`RetentionPolicy::DiscardOnClose`] the filter values are cleared.
    pub fn dismiss(&mut self, listener: &mut impl SearchListener) {
        self.picker = PickerState::Closed;
        if self.retention == RetentionPolicy::DiscardOnClose {
            self.clear();
        }
        tracing::debug!(retention = ?self.retention, "dismissed search form");
        listener.on_close();
    }
}
