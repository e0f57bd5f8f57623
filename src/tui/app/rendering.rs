//! Rendering logic for the journal TUI application.
//!
//! These are pure query methods that read state without modification.

use super::JournalApp;
use crate::tui::components::{EntryListViewContext, SearchModalViewContext};
use crate::tui::input::InputContext;

impl JournalApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Reflexa - Journal";
        let mode = if self.search_open { " [Search]" } else { "" };
        format!("{title}{mode}\n")
    }

    /// Renders the bar describing the applied search.
    pub(super) fn render_search_bar(&self) -> String {
        let label = self.applied.label();
        let count = self.filtered_count();
        let total = self.total_count();
        format!("Search: {label} ({count}/{total})\n")
    }

    /// Renders the entry list body.
    pub(super) fn render_entry_list(&self) -> String {
        let ctx = EntryListViewContext {
            entries: self.index.entries(),
            filtered_indices: &self.filtered_indices,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.calculate_list_height(),
            catalog: self.form.catalog(),
        };
        self.entry_list.view(&ctx)
    }

    /// Renders the search modal body.
    pub(super) fn render_search_modal(&self) -> String {
        let ctx = SearchModalViewContext {
            form: &self.form,
            focused_emotion: self.emotion_cursor.position,
            emotion_scroll: self.emotion_cursor.scroll_offset,
            visible_height: self.calculate_list_height(),
            date_input: self.date_input.as_ref(),
            picker_error: self.picker_error.as_deref(),
        };
        self.search_modal.view(&ctx)
    }

    /// Renders the status bar with hints for the focused area.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = match self.input_context() {
            InputContext::EntryList => "/:search  x:reset  j/k:move  ?:help  q:quit",
            InputContext::SearchForm => {
                "Space:toggle  b:bookmark  s/e:dates  c:clear  Enter:search  Esc:close"
            }
            InputContext::DatePicker => "0-9/-:edit  Enter:set  Del:unset  Esc:cancel",
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Journal:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first entry
  End, G     Go to last entry
  /          Open search
  x          Show all entries

Search:
  j/k        Move between emotions
  Space      Toggle emotion
  b          Toggle bookmarked only
  s, e       Pick start / end date
  c          Clear filters
  Enter      Search
  Esc        Close without searching

Date picker:
  0-9, -     Edit date (YYYY-MM-DD)
  Enter      Set date
  Del        Unset date
  Esc        Cancel

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
